/*! Element shaping.

Turns raw streamed map elements into canonical [crate::types::Document]s.
!*/
mod shaper;

pub use shaper::ElementShaper;
