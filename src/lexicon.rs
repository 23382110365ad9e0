/*! Street vocabulary tables.

Holds the French and English road vocabulary, abbreviation expansions and
tag allow-lists used by the shaper, the classifier and the normalizers.

Montreal street names mix both naming conventions, with one lexical
collision: `St`/`St.` abbreviates "Street" in English but "Saint" in
French/bilingual usage. The tables keep the two readings in separate
structures so the normalizer can order its passes around the collision.
!*/
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {

    /// Default tables for the Montreal export.
    pub static ref MONTREAL: Lexicon = Lexicon::montreal();
}

/// Immutable vocabulary injected into classifier/normalizer components.
pub struct Lexicon {
    french_naming: Vec<&'static str>,
    english_naming: HashSet<&'static str>,
    saint_abbreviations: HashSet<&'static str>,
    english_street_abbreviations: HashMap<&'static str, &'static str>,
    english_direction_abbreviations: HashMap<&'static str, &'static str>,
    french_abbreviations: HashMap<&'static str, &'static str>,
    french_to_english: HashMap<&'static str, &'static str>,
    interest_tags: HashSet<&'static str>,
    created_keys: HashSet<&'static str>,
}

impl Lexicon {
    /// Tables covering the street-naming conventions found in the Montreal area.
    pub fn montreal() -> Self {
        // French qualifiers appear at the *start* of a street name.
        let french_naming = vec![
            "Rue", "rue", "Avenue", "avenue", "Ave.", "Ave", "ave.", "ave", "Boulevard",
            "boulevard", "Boul.", "Boul", "boul.", "boul", "Boulvard", "boulvard", "Autoroute",
            "autoroute", "Chemin", "chemin", "ch.", "ch", "Ch.", "Ch", "1e", "2e", "3e", "4e",
            "5e", "6e", "7e", "8e", "9e", "Place", "place", "Route", "route", "Ruelle", "ruelle",
            "Quai", "quai", "Quai-", "quai-", "Voie", "Court", "Rang", "rang", "Descente",
            "Montée", "Croissant", "Carré", "Impasse", "Promenade", "Cercle", "Terrasse",
        ];

        // English qualifiers appear at the *end*.
        let english_naming = "Street street St St. st st. West W. w. W w East E. e. E e"
            .split_whitespace()
            .collect();

        // Kept apart from both languages: `St` resolves to Saint only once the
        // English Street reading has been ruled out.
        let saint_abbreviations = "St Ste St. Ste. Sainte".split_whitespace().collect();

        let english_street_abbreviations = [
            ("st.", "Street"),
            ("st", "Street"),
            ("St.", "Street"),
            ("St", "Street"),
        ]
        .into_iter()
        .collect();

        let english_direction_abbreviations = [
            ("W.", "West"),
            ("w.", "West"),
            ("W", "West"),
            ("w", "West"),
            ("E.", "East"),
            ("e.", "East"),
            ("E", "East"),
            ("e", "East"),
        ]
        .into_iter()
        .collect();

        let french_abbreviations = [
            ("St", "Saint"),
            ("St.", "Saint"),
            ("Ste.", "Saint"),
            ("ste", "Saint"),
            ("E.", "Est"),
            ("e.", "Est"),
            ("O.", "Ouest"),
            ("o.", "Ouest"),
        ]
        .into_iter()
        .collect();

        let french_to_english = [
            ("Rue", "Street"),
            ("Avenue", "Avenue"),
            ("Boulevard", "Boulevard"),
            ("Place", "Square"),
            ("Chemin", "Road"),
            ("Est", "East"),
            ("Ouest", "West"),
            ("Quai", "Pier"),
        ]
        .into_iter()
        .collect();

        // Also matched by prefix: tags starting with `contact:`.
        let interest_tags = "amenity cuisine name phone denomination religion wheelchair operator"
            .split_whitespace()
            .collect();

        let created_keys = "version changeset timestamp user uid".split_whitespace().collect();

        Lexicon {
            french_naming,
            english_naming,
            saint_abbreviations,
            english_street_abbreviations,
            english_direction_abbreviations,
            french_abbreviations,
            french_to_english,
            interest_tags,
            created_keys,
        }
    }

    /// French road qualifiers, matched as prefixes of a street name.
    pub fn french_naming(&self) -> &[&'static str] {
        &self.french_naming
    }

    /// English road qualifiers and directions, matched against the last token.
    pub fn english_naming(&self) -> &HashSet<&'static str> {
        &self.english_naming
    }

    /// Abbreviations of Saint/Sainte.
    pub fn saint_abbreviations(&self) -> &HashSet<&'static str> {
        &self.saint_abbreviations
    }

    pub fn english_street_abbreviations(&self) -> &HashMap<&'static str, &'static str> {
        &self.english_street_abbreviations
    }

    pub fn english_direction_abbreviations(&self) -> &HashMap<&'static str, &'static str> {
        &self.english_direction_abbreviations
    }

    pub fn french_abbreviations(&self) -> &HashMap<&'static str, &'static str> {
        &self.french_abbreviations
    }

    /// Road-qualifier translation table, including the Est/Ouest directions.
    pub fn french_to_english(&self) -> &HashMap<&'static str, &'static str> {
        &self.french_to_english
    }

    /// Top-level tag keys routed into the `info` sub-document.
    pub fn interest_tags(&self) -> &HashSet<&'static str> {
        &self.interest_tags
    }

    /// Provenance attributes routed into the `created` sub-document.
    pub fn created_keys(&self) -> &HashSet<&'static str> {
        &self.created_keys
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::montreal()
    }
}
