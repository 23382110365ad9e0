//! Raw map elements, as streamed out of an export file.
use std::collections::HashMap;

/// One input map feature, before shaping.
///
/// Supplied once to [crate::shaping::ElementShaper] and not retained:
/// the streaming reader materializes an element, hands it over and drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    /// Element tag name (`node`, `way`, or anything else; the shaper decides).
    pub name: String,
    /// Flat attribute mapping.
    pub attributes: HashMap<String, String>,
    /// Child elements, in document order.
    pub children: Vec<Child>,
}

impl RawElement {
    pub fn new<S: Into<String>>(name: S) -> Self {
        RawElement {
            name: name.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute insertion, mostly for tests.
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }
}

/// A child of a node/way element.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// An `nd` entry; the reference may be missing on malformed input.
    NodeRef { reference: Option<String> },
    /// A `tag` entry carrying a key/value pair.
    Tag { key: String, value: String },
}

impl Child {
    pub fn node_ref<S: Into<String>>(reference: S) -> Self {
        Child::NodeRef {
            reference: Some(reference.into()),
        }
    }

    pub fn tag<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Child::Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}
