//! Street-name normalization.
//!
//! The rule ordering is load-bearing: `St` reads as "Street" in an English
//! name and as "Saint" otherwise, so the English expansion must run before
//! the Saint pass, and the Saint pass before the French one.
use itertools::Itertools;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::identifiers::StreetClassifier;
use crate::lexicon::{Lexicon, MONTREAL};
use crate::types::{Address, FieldValue};

use super::PostalNormalizer;

lazy_static! {
    /// A digit immediately followed by the French ordinal marker.
    static ref ORDINAL_DIGIT: Regex = Regex::new(r"(\d)[eE]").unwrap();
    /// A whole token that is a French ordinal (`24e`).
    static ref ORDINAL_TOKEN: Regex = Regex::new(r"^\d+[eE]$").unwrap();
}

/// Cleans and anglicizes the address sub-document.
///
/// Never fails: a name that classifies as neither language passes through
/// with only title-casing and hyphen removal applied.
pub struct StreetNormalizer {
    lexicon: &'static Lexicon,
    classifier: StreetClassifier,
    postal: PostalNormalizer,
}

impl StreetNormalizer {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self {
            lexicon,
            classifier: StreetClassifier::new(lexicon),
            postal: PostalNormalizer,
        }
    }

    /// Normalize a raw address sub-mapping into its cleaned form.
    pub fn normalize(&self, address: &Address) -> Address {
        let mut address = address.clone();

        // province is the Canadian term, and it is stamped below anyway
        address.remove("state");

        if let Some(raw) = address.get("postcode").cloned() {
            let codes = self.postal.normalize(&raw);
            if codes.is_empty() {
                warn!("corrupt postal code, keeping as-is: {:?}", raw);
            } else {
                address.insert("postcode".to_string(), FieldValue::Many(codes));
            }
        }

        let street = match address.get("street") {
            Some(value) => value.joined().into_owned(),
            None => String::new(),
        };

        if street.is_empty() {
            // an address without a street: nothing to qualify
            address.insert("street".to_string(), FieldValue::One(String::new()));
            return address;
        }

        self.warn_if_suspect(&street);

        address.insert("province".to_string(), FieldValue::from("QC"));
        address.insert("country".to_string(), FieldValue::from("CA"));

        // hyphens are a French compounding convention (St-Catherine)
        let name = title_case(&street).replace('-', " ");
        let name = self.expand_abbreviations(&name);
        let name = if self.classifier.is_french(&name) {
            self.translate(&name)
        } else {
            name
        };

        address.insert("street".to_string(), FieldValue::One(name));
        address
    }

    /// A street value holding one of these is probably a whole address.
    /// Left untouched: there is an actual street named Canada in Montreal.
    fn warn_if_suspect(&self, street: &str) {
        for suspect in [",", "QC", "Quebec", "Montreal", "Canada"] {
            if street.contains(suspect) {
                warn!("potentially a full address in a street field: {:?}", street);
                break;
            }
        }
    }

    /// Expands abbreviations, English reading first.
    ///
    /// Once the English pass has resolved a trailing `St` into Street, any
    /// remaining Saint abbreviation really means Saint.
    fn expand_abbreviations(&self, street_name: &str) -> String {
        let mut name = street_name.to_string();

        if self.classifier.is_english(&name) {
            name = self.expand_english(&name);
        }

        let saint_passed = name
            .split_whitespace()
            .map(|token| {
                if self.lexicon.saint_abbreviations().contains(token) {
                    "Saint"
                } else {
                    token
                }
            })
            .join(" ");

        if self.classifier.is_french(&name) {
            return saint_passed
                .split_whitespace()
                .map(|token| match self.lexicon.french_abbreviations().get(token) {
                    Some(full) => {
                        debug!("expanding {:?} to {:?} in {:?}", token, full, street_name);
                        *full
                    }
                    None => token,
                })
                .join(" ");
        }

        saint_passed
    }

    /// Expands a trailing English direction and/or street qualifier.
    fn expand_english(&self, name: &str) -> String {
        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        let last = match tokens.len().checked_sub(1) {
            Some(index) => index,
            None => return name.to_string(),
        };

        if let Some(direction) = self.lexicon.english_direction_abbreviations().get(tokens[last]) {
            tokens[last] = *direction;
            // the direction was abbreviated, so the qualifier right before
            // it may be abbreviated too ("... St W.")
            if last >= 1 {
                if let Some(street) =
                    self.lexicon.english_street_abbreviations().get(tokens[last - 1])
                {
                    tokens[last - 1] = *street;
                }
            }
        } else if let Some(street) = self.lexicon.english_street_abbreviations().get(tokens[last]) {
            tokens[last] = *street;
        }

        tokens.iter().join(" ")
    }

    /// Rewrites an expanded French name into English word order.
    fn translate(&self, name: &str) -> String {
        let mut tokens: Vec<&str> = name.split_whitespace().collect();

        if let Some(first) = tokens.first().copied() {
            if let Some(english) = self.lexicon.french_to_english().get(first) {
                // the qualifier moves from prefix to suffix position
                tokens.remove(0);
                tokens.push(*english);
            } else if ORDINAL_TOKEN.is_match(first) {
                // ordinal-led names (1e Rue) already carry the qualifier in
                // suffix position, translate it in place
                if let Some(second) = tokens.get(1).copied() {
                    if let Some(english) = self.lexicon.french_to_english().get(second) {
                        tokens[1] = *english;
                    }
                }
            }
        }

        for direction in ["Est", "Ouest"] {
            if let Some(index) = tokens.iter().position(|token| *token == direction) {
                tokens.remove(index);
                if let Some(english) = self.lexicon.french_to_english().get(direction) {
                    tokens.push(*english);
                }
            }
        }

        self.anglicize_ordinals(&tokens.iter().join(" "))
    }

    /// Converts French numeric ordinals (24e) to English ones (24th).
    ///
    /// The digit captured before the first marker picks the suffix for every
    /// marker in the name.
    fn anglicize_ordinals(&self, name: &str) -> String {
        let suffix = match ORDINAL_DIGIT.captures(name) {
            Some(caps) => match caps.get(1).map(|digit| digit.as_str()) {
                Some("1") => "st",
                Some("2") => "nd",
                Some("3") => "rd",
                _ => "th",
            },
            None => return name.to_string(),
        };

        ORDINAL_DIGIT
            .replace_all(name, |caps: &regex::Captures| format!("{}{}", &caps[1], suffix))
            .into_owned()
    }
}

impl Default for StreetNormalizer {
    fn default() -> Self {
        Self::new(&MONTREAL)
    }
}

/// Title-casing: a cased character following a non-cased one is uppercased,
/// the rest lowercased, so "24e" becomes "24E" and "l'église" becomes
/// "L'Église". Digits and apostrophes count as word boundaries.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}
