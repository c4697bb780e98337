//! PDF Name object.

use std::borrow::Borrow;

/// A PDF name object (e.g., /Type, /Page).
///
/// A name is an arbitrary byte sequence. Regular bytes are emitted
/// verbatim after the leading slash; every other byte is escaped as
/// `#xx`. Names double as dictionary keys, so they hash and compare by
/// their raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdfName(Vec<u8>);

impl PdfName {
    /// Creates a name from raw bytes, without the leading slash.
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self(name.into())
    }

    /// Returns the raw bytes without the leading slash.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Serializes the name with `#xx` escaping and a trailing space.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        out.push(b'/');
        for &byte in &self.0 {
            if Self::is_regular(byte) {
                out.push(byte);
            } else {
                out.push(b'#');
                out.extend_from_slice(format!("{:02x}", byte).as_bytes());
            }
        }
        out.push(b' ');
    }

    /// A regular byte is printable ASCII that is neither a delimiter nor
    /// the escape character itself.
    fn is_regular(byte: u8) -> bool {
        (33..=126).contains(&byte)
            && !matches!(
                byte,
                b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
            )
    }
}

impl From<&str> for PdfName {
    fn from(name: &str) -> Self {
        Self(name.as_bytes().to_vec())
    }
}

impl From<String> for PdfName {
    fn from(name: String) -> Self {
        Self(name.into_bytes())
    }
}

impl From<&[u8]> for PdfName {
    fn from(name: &[u8]) -> Self {
        Self(name.to_vec())
    }
}

// Lets dictionaries be indexed by plain byte strings.
impl Borrow<[u8]> for PdfName {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}
