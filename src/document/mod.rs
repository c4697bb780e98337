//! The merger's view of a parsed PDF document.
//!
//! Parsing is out of scope for this crate; an external parser builds a
//! [`SourceDocument`] and hands it to `PdfMerger::append`, which releases
//! it before the next document is ingested.

mod info;
mod version;

pub use info::DocumentInfo;
pub use version::PdfVersion;

use crate::object::Object;
use crate::types::ObjectId;

/// One occupied slot of a source document's object table.
#[derive(Debug, Clone)]
pub struct SourceObject {
    /// The generation number the object was parsed at.
    pub generation: u16,
    /// The object value.
    pub value: Object,
}

/// A fully parsed PDF document as the merger consumes it.
///
/// The object table is an ordered slot array: the slot at index `i`
/// holds the object numbered `i + 1`, and an empty slot is a free object
/// number (a deleted object in the source). The page list preserves the
/// source document's page order.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    slots: Vec<Option<SourceObject>>,
    pages: Vec<ObjectId>,
}

impl SourceDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object at the next object number, generation 0, and
    /// returns its identifier.
    pub fn push_object(&mut self, value: Object) -> ObjectId {
        self.push_object_with_generation(value, 0)
    }

    /// Appends an object at the next object number with an explicit
    /// generation, and returns its identifier.
    pub fn push_object_with_generation(&mut self, value: Object, generation: u16) -> ObjectId {
        self.slots.push(Some(SourceObject { generation, value }));
        ObjectId::with_generation(self.slots.len() as u32, generation)
    }

    /// Appends a free slot: an object number with no live object.
    pub fn push_free_slot(&mut self) {
        self.slots.push(None);
    }

    /// Records a page reference. Pages keep their insertion order.
    pub fn add_page(&mut self, page: ObjectId) {
        self.pages.push(page);
    }

    /// Returns the number of object slots, free slots included.
    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Returns true if the document holds no object slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates `(object number, slot)` pairs in object-number order,
    /// starting at 1.
    pub fn slots(&self) -> impl Iterator<Item = (u32, Option<&SourceObject>)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (index as u32 + 1, slot.as_ref()))
    }

    /// Looks up the slot for an object number, if occupied.
    pub fn get(&self, number: u32) -> Option<&SourceObject> {
        if number == 0 {
            return None;
        }
        self.slots.get(number as usize - 1)?.as_ref()
    }

    /// Returns the page references in order.
    pub fn pages(&self) -> &[ObjectId] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_dense_numbers() {
        let mut doc = SourceDocument::new();
        let a = doc.push_object(Object::Integer(1));
        doc.push_free_slot();
        let b = doc.push_object(Object::Integer(2));

        assert_eq!(a.number, 1);
        assert_eq!(b.number, 3);
        assert_eq!(doc.slot_count(), 3);
    }

    #[test]
    fn test_slots_iterate_in_number_order() {
        let mut doc = SourceDocument::new();
        doc.push_object(Object::Null);
        doc.push_free_slot();
        doc.push_object(Object::Boolean(true));

        let numbers: Vec<_> = doc
            .slots()
            .map(|(number, slot)| (number, slot.is_some()))
            .collect();
        assert_eq!(numbers, vec![(1, true), (2, false), (3, true)]);
    }

    #[test]
    fn test_get_skips_free_and_zero() {
        let mut doc = SourceDocument::new();
        doc.push_free_slot();
        doc.push_object(Object::Integer(7));

        assert!(doc.get(0).is_none());
        assert!(doc.get(1).is_none());
        assert_eq!(doc.get(2).map(|s| &s.value), Some(&Object::Integer(7)));
        assert!(doc.get(3).is_none());
    }

    #[test]
    fn test_pages_keep_order() {
        let mut doc = SourceDocument::new();
        let a = doc.push_object(Object::Null);
        let b = doc.push_object(Object::Null);
        doc.add_page(b);
        doc.add_page(a);
        assert_eq!(doc.pages(), &[b, a]);
    }
}
