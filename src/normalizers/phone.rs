//! Phone-number normalization.
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::types::FieldValue;

lazy_static! {
    /// North-American number: optional +1, optional (parenthesized) area
    /// code, exchange, subscriber, with `-`, `.` or space separators.
    static ref PHONE: Regex =
        Regex::new(r"\(?\+?1?\)?[-. ]?\(?(\d{3})?\)?[-. ]?(\d{3})[-. ]?(\d{4})").unwrap();
}

/// Outcome of normalizing one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The cleaned values the field should be rewritten to.
    Values(Vec<String>),
    /// Nothing usable was extracted; carries the raw value for the
    /// corruption record.
    Corrupt(FieldValue),
}

/// Extracts and reformats phone numbers to `+1 (AAA) EEE-SSSS`.
///
/// The area code is mandatory: Montreal spans several (514, 450, 438, …),
/// so a number without one cannot be dialed back. Matches lacking it are
/// dropped; the field is corrupt only when no valid number remains.
#[derive(Default)]
pub struct PhoneNormalizer;

impl PhoneNormalizer {
    pub fn normalize(&self, value: &FieldValue) -> Normalized {
        let raw = value.joined();
        let mut numbers = Vec::new();

        for caps in PHONE.captures_iter(&raw) {
            match caps.get(1) {
                Some(area) => numbers.push(format!(
                    "+1 ({}) {}-{}",
                    area.as_str(),
                    &caps[2],
                    &caps[3]
                )),
                None => warn!(
                    "phone match {:?} has no area code, dropping it",
                    caps.get(0).map(|m| m.as_str()).unwrap_or_default()
                ),
            }
        }

        if numbers.is_empty() {
            warn!("corrupt phone number: {:?}", value);
            Normalized::Corrupt(value.clone())
        } else {
            Normalized::Values(numbers)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::FieldValue;

    use super::{Normalized, PhoneNormalizer};

    #[test]
    fn parenthesized_area_code() {
        let normalizer = PhoneNormalizer;
        assert_eq!(
            normalizer.normalize(&FieldValue::from("(514) 555-1234")),
            Normalized::Values(vec!["+1 (514) 555-1234".to_string()])
        );
    }

    #[test]
    fn country_code_and_separators() {
        let normalizer = PhoneNormalizer;
        for raw in ["+1 514 555 1234", "1-514-555-1234", "514.555.1234", "5145551234"] {
            assert_eq!(
                normalizer.normalize(&FieldValue::from(raw)),
                Normalized::Values(vec!["+1 (514) 555-1234".to_string()]),
                "failed on {:?}",
                raw
            );
        }
    }

    #[test]
    fn missing_area_code_is_corrupt() {
        let normalizer = PhoneNormalizer;
        let raw = FieldValue::from("555-1234");
        assert_eq!(normalizer.normalize(&raw), Normalized::Corrupt(raw.clone()));
    }

    #[test]
    fn unmatchable_value_is_corrupt() {
        let normalizer = PhoneNormalizer;
        let raw = FieldValue::from("call us!");
        assert_eq!(normalizer.normalize(&raw), Normalized::Corrupt(raw.clone()));
    }

    #[test]
    fn valid_numbers_survive_an_invalid_neighbor() {
        // one dialable number and one without an area code: keep the
        // dialable one, do not flag the field
        let normalizer = PhoneNormalizer;
        assert_eq!(
            normalizer.normalize(&FieldValue::from("555-1234 or (438) 555-0000")),
            Normalized::Values(vec!["+1 (438) 555-0000".to_string()])
        );
    }

    #[test]
    fn list_values_are_joined_before_extraction() {
        let normalizer = PhoneNormalizer;
        let raw = FieldValue::Many(vec!["514-555-1234".to_string(), "(450) 555-9999".to_string()]);
        assert_eq!(
            normalizer.normalize(&raw),
            Normalized::Values(vec![
                "+1 (514) 555-1234".to_string(),
                "+1 (450) 555-9999".to_string()
            ])
        );
    }
}
