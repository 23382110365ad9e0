//! Canadian postal-code normalization.
use lazy_static::lazy_static;
use regex::Regex;

use crate::types::FieldValue;

lazy_static! {
    /// Letter-digit-letter, up to two separator characters, digit-letter-digit.
    static ref POSTAL: Regex =
        Regex::new(r"([A-Za-z]\d[A-Za-z])[\s\-.]{0,2}(\d[A-Za-z]\d)").unwrap();
}

/// Extracts postal codes and reformats them as `LDL DLD`.
///
/// Multi-unit buildings legitimately carry more than one code, so every
/// match is returned. An empty result means the field could not be parsed;
/// that is the caller's cue to log and keep the original value. A bad
/// postal code alone does not make a document corrupt.
#[derive(Default)]
pub struct PostalNormalizer;

impl PostalNormalizer {
    pub fn normalize(&self, value: &FieldValue) -> Vec<String> {
        let raw = value.joined();
        POSTAL
            .captures_iter(&raw)
            .map(|caps| format!("{} {}", &caps[1], &caps[2]))
            .collect()
    }
}
