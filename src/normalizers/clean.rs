//! Clean trait and the document-level cleaners.
use crate::types::{Address, Document, Field, FieldValue};

use super::{Normalized, PhoneNormalizer, StreetNormalizer};

/// Write-back produced by cleaning one document.
///
/// The cleaners never persist anything themselves: the driver executes the
/// patch against the store, including the three corruption writes (flag,
/// raw-value record, field removal).
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    SetPhone(Vec<String>),
    SetAddress(Address),
    Corrupt { field: Field, raw: FieldValue },
}

/// A document-level cleaner keyed on one field.
pub trait Clean {
    /// Field the cleaner wants present on candidate documents.
    fn field(&self) -> Field;

    /// Inspects one at-rest document and returns its write-back, if any.
    fn clean(&self, document: &Document) -> Option<Patch>;
}

/// Standardizes `info.phone`; flags the document when nothing dialable is left.
#[derive(Default)]
pub struct PhoneCleaner {
    normalizer: PhoneNormalizer,
}

impl Clean for PhoneCleaner {
    fn field(&self) -> Field {
        Field::Phone
    }

    fn clean(&self, document: &Document) -> Option<Patch> {
        let raw = document.phone()?;
        match self.normalizer.normalize(raw) {
            Normalized::Values(numbers) => Some(Patch::SetPhone(numbers)),
            Normalized::Corrupt(raw) => Some(Patch::Corrupt {
                field: Field::Phone,
                raw,
            }),
        }
    }
}

/// Rewrites the address sub-document through the street normalizer.
///
/// Address normalization always produces a usable mapping, so this cleaner
/// never emits a corruption patch.
#[derive(Default)]
pub struct AddressCleaner {
    normalizer: StreetNormalizer,
}

impl Clean for AddressCleaner {
    fn field(&self) -> Field {
        Field::Address
    }

    fn clean(&self, document: &Document) -> Option<Patch> {
        let address = document.address()?;
        Some(Patch::SetAddress(self.normalizer.normalize(address)))
    }
}
