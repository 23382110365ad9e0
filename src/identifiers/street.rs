//! Suffix/prefix street-name classification.
use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::{Lexicon, MONTREAL};

lazy_static! {
    /// Numbered streets in English end their numeral with an ordinal suffix.
    static ref ENGLISH_ORDINAL: Regex = Regex::new(r"\d+(th|rd|nd|st)").unwrap();
    /// The French ordinal marker is a bare `e` after the numeral (24e).
    static ref FRENCH_ORDINAL: Regex = Regex::new(r"\d+[eE]").unwrap();
}

/// Detects the naming convention of a street name.
pub struct StreetClassifier {
    lexicon: &'static Lexicon,
}

impl StreetClassifier {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// True when the last whitespace token is an English road qualifier or
    /// direction, or when the name carries an English numeric ordinal.
    pub fn is_english(&self, street_name: &str) -> bool {
        if ENGLISH_ORDINAL.is_match(street_name) {
            return true;
        }

        match street_name.split_whitespace().last() {
            Some(last) => self.lexicon.english_naming().contains(last),
            None => false,
        }
    }

    /// True when the name starts with a French road qualifier (case-sensitive
    /// prefix) or carries a French numeric ordinal marker.
    pub fn is_french(&self, street_name: &str) -> bool {
        if FRENCH_ORDINAL.is_match(street_name) {
            return true;
        }

        self.lexicon
            .french_naming()
            .iter()
            .any(|prefix| street_name.starts_with(prefix))
    }
}

impl Default for StreetClassifier {
    fn default() -> Self {
        Self::new(&MONTREAL)
    }
}
