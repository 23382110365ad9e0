//! At-rest documents produced by the shaping stage.
use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Address sub-document: `addr:`-qualified tag subkeys.
pub type Address = HashMap<String, FieldValue>;
/// Info sub-document: `contact:`-qualified subkeys plus allow-listed tags.
pub type Info = HashMap<String, FieldValue>;

/// Kind of the source element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
}

/// A field value that is either one raw string or a list of already
/// normalized values.
///
/// Freshly shaped documents hold single strings; the cleaning stage rewrites
/// phone and postal-code fields into lists (a building can legitimately carry
/// two postal codes). Untagged so both shapes round-trip as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Coerce to a single string; list values are joined with spaces.
    pub fn joined(&self) -> Cow<str> {
        match self {
            FieldValue::One(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Many(v) => Cow::Owned(v.join(" ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::One(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::One(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::Many(v)
    }
}

/// Normalizable locations on a document, used to filter and unset fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Phone,
    Address,
}

impl Field {
    /// Dotted path of the field inside the document.
    pub fn path(&self) -> &'static str {
        match self {
            Field::Phone => "info.phone",
            Field::Address => "address",
        }
    }
}

/// Canonical nested record produced from one [crate::types::RawElement].
///
/// `created` and `is_amenity` are always present; the optional sub-documents
/// only appear when the source element carried matching data, so the
/// serialized shape stays sparse. The corruption pair is absent until the
/// cleaning stage flags the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    kind: ElementKind,
    created: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<Info>,
    is_amenity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_corrupt_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corrupt_fields: Option<FieldValue>,
    /// Remaining top-level attributes, copied verbatim.
    #[serde(flatten)]
    extra: HashMap<String, String>,
}

impl Document {
    pub fn new(kind: ElementKind) -> Self {
        Document {
            kind,
            created: HashMap::new(),
            position: None,
            node_refs: None,
            address: None,
            info: None,
            is_amenity: false,
            has_corrupt_data: None,
            corrupt_fields: None,
            extra: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get a reference to the provenance attributes.
    pub fn created(&self) -> &HashMap<String, String> {
        &self.created
    }

    /// `[latitude, longitude]`, latitude always first.
    pub fn position(&self) -> Option<&[f64; 2]> {
        self.position.as_ref()
    }

    pub fn node_refs(&self) -> Option<&Vec<String>> {
        self.node_refs.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// The `info.phone` field, if any.
    pub fn phone(&self) -> Option<&FieldValue> {
        self.info.as_ref().and_then(|info| info.get("phone"))
    }

    pub fn is_amenity(&self) -> bool {
        self.is_amenity
    }

    /// Remaining verbatim attributes.
    pub fn extra(&self) -> &HashMap<String, String> {
        &self.extra
    }

    pub fn has_corrupt_data(&self) -> bool {
        self.has_corrupt_data.unwrap_or(false)
    }

    pub fn corrupt_fields(&self) -> Option<&FieldValue> {
        self.corrupt_fields.as_ref()
    }

    /// True when the given field is present on the document.
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::Phone => self.phone().is_some(),
            Field::Address => self.address.is_some(),
        }
    }

    // Shaping-stage mutators.

    pub(crate) fn insert_created(&mut self, key: &str, value: &str) {
        self.created.insert(key.to_string(), value.to_string());
    }

    pub(crate) fn set_position(&mut self, position: [f64; 2]) {
        self.position = Some(position);
    }

    pub(crate) fn push_node_ref(&mut self, reference: String) {
        self.node_refs.get_or_insert_with(Vec::new).push(reference);
    }

    /// Last write wins on repeated subkeys.
    pub(crate) fn insert_address(&mut self, subkey: &str, value: &str) {
        self.address
            .get_or_insert_with(HashMap::new)
            .insert(subkey.to_string(), FieldValue::from(value));
    }

    /// Last write wins on repeated subkeys.
    pub(crate) fn insert_info(&mut self, subkey: &str, value: &str) {
        self.info
            .get_or_insert_with(HashMap::new)
            .insert(subkey.to_string(), FieldValue::from(value));
    }

    pub(crate) fn set_amenity(&mut self, is_amenity: bool) {
        self.is_amenity = is_amenity;
    }

    pub(crate) fn insert_extra(&mut self, key: &str, value: &str) {
        self.extra.insert(key.to_string(), value.to_string());
    }

    // Cleaning-stage mutators, driven through the store.

    pub(crate) fn set_phone(&mut self, numbers: Vec<String>) {
        self.info
            .get_or_insert_with(HashMap::new)
            .insert("phone".to_string(), FieldValue::Many(numbers));
    }

    pub(crate) fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub(crate) fn set_corrupt_flag(&mut self) {
        self.has_corrupt_data = Some(true);
    }

    pub(crate) fn set_corrupt_fields(&mut self, raw: FieldValue) {
        self.corrupt_fields = Some(raw);
    }

    pub(crate) fn clear_field(&mut self, field: Field) {
        match field {
            Field::Phone => {
                if let Some(info) = self.info.as_mut() {
                    info.remove("phone");
                }
            }
            Field::Address => {
                self.address = None;
            }
        }
    }
}
