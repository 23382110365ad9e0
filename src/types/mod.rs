//! Record types flowing through the two pipeline stages.
mod document;
mod element;

pub use document::{Address, Document, ElementKind, Field, FieldValue, Info};
pub use element::{Child, RawElement};
