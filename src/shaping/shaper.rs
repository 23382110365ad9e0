//! RawElement → Document conversion.
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::lexicon::{Lexicon, MONTREAL};
use crate::types::{Child, Document, ElementKind, RawElement};

lazy_static! {
    /// Attribute names carrying any of these characters are never copied.
    static ref PROBLEM_CHARS: Regex = Regex::new(r#"[=+/&<>;'"?%#$@,. \t\r\n]"#).unwrap();
}

/// Shapes one raw element into a canonical document.
///
/// Pure and memory-bounded per call; the caller owns releasing the source
/// element once shaped. Malformed pieces of an element are skipped with a
/// diagnostic, never escalated.
pub struct ElementShaper {
    lexicon: &'static Lexicon,
}

impl ElementShaper {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns [None] for any element kind other than node/way.
    pub fn shape(&self, element: &RawElement) -> Option<Document> {
        let kind = match element.name.as_str() {
            "node" => ElementKind::Node,
            "way" => ElementKind::Way,
            other => {
                debug!("nothing to shape in a <{}> element", other);
                return None;
            }
        };

        let mut doc = Document::new(kind);

        // Both coordinates must be seen before a position is emitted, and
        // latitude goes first no matter the attribute order.
        let mut latitude = None;
        let mut longitude = None;

        for (key, value) in &element.attributes {
            if PROBLEM_CHARS.is_match(key) {
                warn!(
                    "attribute {:?} contains a problematic character, skipping (element id: {})",
                    key,
                    element.attributes.get("id").map(String::as_str).unwrap_or("?"),
                );
                continue;
            }

            match key.as_str() {
                "lat" => latitude = parse_coordinate(key, value),
                "lon" => longitude = parse_coordinate(key, value),
                k if self.lexicon.created_keys().contains(k) => doc.insert_created(key, value),
                _ => doc.insert_extra(key, value),
            }
        }

        if let (Some(lat), Some(lon)) = (latitude, longitude) {
            doc.set_position([lat, lon]);
        }

        for child in &element.children {
            match child {
                Child::NodeRef {
                    reference: Some(reference),
                } => doc.push_node_ref(reference.clone()),
                Child::NodeRef { reference: None } => (),
                Child::Tag { key, value } => self.route_tag(&mut doc, key, value),
            }
        }

        Some(doc)
    }

    /// Routes one `tag` child by key prefix.
    fn route_tag(&self, doc: &mut Document, key: &str, value: &str) {
        if let Some(rest) = key.strip_prefix("addr:") {
            // only a single sub-level is accepted, addr:street:corner and
            // deeper are dropped
            if rest.contains(':') {
                debug!("dropping nested address tag {:?}", key);
            } else {
                doc.insert_address(rest, value);
            }
        } else if let Some(rest) = key.strip_prefix("contact:") {
            let subkey = rest.split(':').next().unwrap_or(rest);
            doc.insert_info(subkey, value);
        } else if self.lexicon.interest_tags().contains(key) {
            if key == "amenity" {
                doc.set_amenity(true);
            }
            doc.insert_info(key, value);
        }
    }
}

impl Default for ElementShaper {
    fn default() -> Self {
        Self::new(&MONTREAL)
    }
}

fn parse_coordinate(key: &str, value: &str) -> Option<f64> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("unparseable coordinate {}={:?}, treating as absent", key, value);
            None
        }
    }
}
