//! Deep-copy rewriting of indirect references.

use crate::object::{Object, PdfDictionary, PdfStream};
use crate::types::ObjectId;
use std::collections::HashMap;

/// A mapping from source-document references to destination references.
pub type ReferenceMap = HashMap<ObjectId, ObjectId>;

/// Produces a structurally identical copy of `object` with every
/// reference found in `mapping` replaced by its destination.
///
/// Unmapped references are preserved verbatim. Recursion covers arrays,
/// dictionary values, and stream dictionaries; names are never
/// references, and stream payloads are copied unchanged.
pub fn rewrite_references(object: &Object, mapping: &ReferenceMap) -> Object {
    match object {
        Object::Reference(id) => Object::Reference(*mapping.get(id).unwrap_or(id)),
        Object::Array(array) => Object::Array(
            array
                .iter()
                .map(|element| rewrite_references(element, mapping))
                .collect(),
        ),
        Object::Dictionary(dict) => Object::Dictionary(rewrite_dictionary(dict, mapping)),
        Object::Stream(stream) => Object::Stream(PdfStream::from_raw(
            rewrite_dictionary(&stream.dictionary, mapping),
            stream.data().to_vec(),
        )),
        other => other.clone(),
    }
}

fn rewrite_dictionary(dict: &PdfDictionary, mapping: &ReferenceMap) -> PdfDictionary {
    let mut out = PdfDictionary::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        out.set(key.clone(), rewrite_references(value, mapping));
    }
    out
}
