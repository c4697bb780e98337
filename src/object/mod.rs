//! PDF object types and their serialization.

mod array;
mod dictionary;
mod name;
mod stream;
mod string;

pub use array::PdfArray;
pub use dictionary::{DictionaryBuilder, PdfDictionary};
pub use name::PdfName;
pub use stream::{PdfStream, StreamBuilder};
pub use string::PdfString;

use crate::error::ObjectError;
use crate::types::ObjectId;

/// A PDF value, one of the ten cases of the PDF object grammar.
///
/// Serialization is deterministic: the same value always produces the
/// same bytes, every atom ends with a single space, and recursion into
/// arrays, dictionaries, and streams is explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// The null object.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// An integer number.
    Integer(i64),
    /// A real (floating-point) number.
    Real(f64),
    /// A string with an arbitrary byte payload.
    String(PdfString),
    /// A name object (e.g., /Type).
    Name(PdfName),
    /// An array of objects.
    Array(PdfArray),
    /// A dictionary of name-keyed values.
    Dictionary(PdfDictionary),
    /// A stream: dictionary plus opaque payload.
    Stream(PdfStream),
    /// An indirect reference to another object.
    Reference(ObjectId),
}

impl Object {
    /// Serializes the value into `out`.
    pub fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), ObjectError> {
        match self {
            Object::Null => out.extend_from_slice(b"null "),
            Object::Boolean(true) => out.extend_from_slice(b"true "),
            Object::Boolean(false) => out.extend_from_slice(b"false "),
            Object::Integer(i) => {
                out.extend_from_slice(i.to_string().as_bytes());
                out.push(b' ');
            }
            // Fixed 5-digit fractional form, no exponent.
            Object::Real(r) => out.extend_from_slice(format!("{:.5} ", r).as_bytes()),
            Object::String(s) => s.serialize_into(out),
            Object::Name(n) => n.serialize_into(out),
            Object::Array(a) => a.serialize_into(out)?,
            Object::Dictionary(d) => d.serialize_into(out)?,
            Object::Stream(s) => s.serialize_into(out)?,
            Object::Reference(id) => {
                out.extend_from_slice(format!("{} {} R ", id.number, id.generation).as_bytes());
            }
        }
        Ok(())
    }

    /// Serializes the value into a fresh byte vector.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, ObjectError> {
        let mut out = Vec::new();
        self.serialize_into(&mut out)?;
        Ok(out)
    }

    /// Returns true if this is a null object.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Returns true if this is a stream object.
    pub fn is_stream(&self) -> bool {
        matches!(self, Object::Stream(_))
    }

    /// Attempts to get the object as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get the object as a dictionary.
    pub fn as_dictionary(&self) -> Option<&PdfDictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to get the object as an array.
    pub fn as_array(&self) -> Option<&PdfArray> {
        match self {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to get the object as an indirect reference.
    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }
}

// Conversion implementations

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<PdfName> for Object {
    fn from(n: PdfName) -> Self {
        Object::Name(n)
    }
}

impl From<PdfString> for Object {
    fn from(s: PdfString) -> Self {
        Object::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(PdfString::from(s))
    }
}

impl From<PdfArray> for Object {
    fn from(a: PdfArray) -> Self {
        Object::Array(a)
    }
}

impl From<PdfDictionary> for Object {
    fn from(d: PdfDictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<PdfStream> for Object {
    fn from(s: PdfStream) -> Self {
        Object::Stream(s)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

impl<T: Into<Object>> From<Vec<T>> for Object {
    fn from(vec: Vec<T>) -> Self {
        Object::Array(vec.into_iter().map(Into::into).collect())
    }
}
