//! PDF Dictionary object.

use super::{Object, PdfName};
use crate::error::ObjectError;
use indexmap::IndexMap;

/// A PDF dictionary object, written as `<< /Key value ... >> `.
///
/// Keys are names by construction, and the IndexMap preserves insertion
/// order so that output bytes are reproducible. Inserting an existing
/// key replaces its value, which rules out duplicate keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: IndexMap<PdfName, Object>,
}

impl PdfDictionary {
    /// Creates a new empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a dictionary with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets a key-value pair in the dictionary.
    pub fn set(&mut self, key: impl Into<PdfName>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key.as_bytes())
    }

    /// Checks if the dictionary contains a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key.as_bytes())
    }

    /// Removes a key and returns its value, preserving the order of the
    /// remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.shift_remove(key.as_bytes())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PdfName, &Object)> {
        self.entries.iter()
    }

    /// Serializes the dictionary, each key as a name followed by its
    /// value, in insertion order.
    pub fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), ObjectError> {
        out.extend_from_slice(b"<< ");
        for (key, value) in &self.entries {
            key.serialize_into(out);
            value.serialize_into(out)?;
        }
        out.extend_from_slice(b">> ");
        Ok(())
    }
}

/// Builder for creating PDF dictionaries fluently.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    dict: PdfDictionary,
}

impl DictionaryBuilder {
    /// Creates a new dictionary builder.
    pub fn new() -> Self {
        Self {
            dict: PdfDictionary::new(),
        }
    }

    /// Sets a key-value pair.
    pub fn set(mut self, key: impl Into<PdfName>, value: impl Into<Object>) -> Self {
        self.dict.set(key, value);
        self
    }

    /// Sets the /Type key.
    pub fn type_name(self, name: impl Into<PdfName>) -> Self {
        self.set("Type", Object::Name(name.into()))
    }

    /// Builds the dictionary.
    pub fn build(self) -> PdfDictionary {
        self.dict
    }
}
