/*! Document store boundary.

The pipeline core does not manage a storage backend: it talks to a narrow
[Store] trait (insert, field-presence find, update, unset) and returns
tagged outcomes for the driver to apply. [MemStore] is the Vec-backed
reference implementation used by the tests and by callers that do not need
a real backend.
!*/
use crate::error::Error;
use crate::types::{Address, Document, Field, FieldValue};

/// Opaque handle to a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocId(usize);

/// A single-field write, the only updates the cleaning stage performs.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOp {
    SetPhone(Vec<String>),
    SetAddress(Address),
    SetCorruptFlag,
    SetCorruptFields(FieldValue),
}

/// Narrow storage contract consumed by the pipeline stages.
pub trait Store {
    fn insert(&mut self, documents: Vec<Document>) -> Result<(), Error>;

    /// Documents carrying the given field, with their handles.
    fn find_with(&self, field: Field) -> Result<Vec<(DocId, Document)>, Error>;

    fn update(&mut self, id: DocId, op: UpdateOp) -> Result<(), Error>;

    fn unset(&mut self, id: DocId, field: Field) -> Result<(), Error>;
}

/// In-memory store.
#[derive(Default)]
pub struct MemStore {
    documents: Vec<Document>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the stored documents, in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn document_mut(&mut self, id: DocId) -> Result<&mut Document, Error> {
        self.documents
            .get_mut(id.0)
            .ok_or(Error::MissingDocument(id.0))
    }
}

impl Store for MemStore {
    fn insert(&mut self, documents: Vec<Document>) -> Result<(), Error> {
        self.documents.extend(documents);
        Ok(())
    }

    fn find_with(&self, field: Field) -> Result<Vec<(DocId, Document)>, Error> {
        Ok(self
            .documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.has_field(field))
            .map(|(index, doc)| (DocId(index), doc.clone()))
            .collect())
    }

    fn update(&mut self, id: DocId, op: UpdateOp) -> Result<(), Error> {
        let doc = self.document_mut(id)?;
        match op {
            UpdateOp::SetPhone(numbers) => doc.set_phone(numbers),
            UpdateOp::SetAddress(address) => doc.set_address(address),
            UpdateOp::SetCorruptFlag => doc.set_corrupt_flag(),
            UpdateOp::SetCorruptFields(raw) => doc.set_corrupt_fields(raw),
        }
        Ok(())
    }

    fn unset(&mut self, id: DocId, field: Field) -> Result<(), Error> {
        self.document_mut(id)?.clear_field(field);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Document, ElementKind, Field, FieldValue};

    use super::{MemStore, Store, UpdateOp};

    fn gen_store() -> MemStore {
        let mut with_phone = Document::new(ElementKind::Node);
        with_phone.insert_info("phone", "514-555-1234");

        let mut with_address = Document::new(ElementKind::Way);
        with_address.insert_address("street", "Union St");

        let mut store = MemStore::new();
        store
            .insert(vec![with_phone, with_address, Document::new(ElementKind::Node)])
            .unwrap();
        store
    }

    #[test]
    fn find_with_filters_on_field_presence() {
        let store = gen_store();
        assert_eq!(store.find_with(Field::Phone).unwrap().len(), 1);
        assert_eq!(store.find_with(Field::Address).unwrap().len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_and_unset_roundtrip() {
        let mut store = gen_store();
        let id = store.find_with(Field::Phone).unwrap()[0].0;

        store
            .update(id, UpdateOp::SetPhone(vec!["+1 (514) 555-1234".to_string()]))
            .unwrap();
        let (_, updated) = store.find_with(Field::Phone).unwrap()[0].clone();
        assert_eq!(
            updated.phone(),
            Some(&FieldValue::Many(vec!["+1 (514) 555-1234".to_string()]))
        );

        store.unset(id, Field::Phone).unwrap();
        assert!(store.find_with(Field::Phone).unwrap().is_empty());
    }

    #[test]
    fn corruption_writes_mark_the_document() {
        let mut store = gen_store();
        let (id, doc) = store.find_with(Field::Phone).unwrap()[0].clone();
        let raw = doc.phone().unwrap().clone();

        store.update(id, UpdateOp::SetCorruptFlag).unwrap();
        store.update(id, UpdateOp::SetCorruptFields(raw.clone())).unwrap();
        store.unset(id, Field::Phone).unwrap();

        let flagged = &store.documents()[0];
        assert!(flagged.has_corrupt_data());
        assert_eq!(flagged.corrupt_fields(), Some(&raw));
        assert!(flagged.phone().is_none());
    }

    #[test]
    fn missing_document_is_an_error() {
        let mut store = MemStore::new();
        let id = super::DocId(7);
        assert!(store.update(id, UpdateOp::SetCorruptFlag).is_err());
    }
}
