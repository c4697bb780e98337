//! PDF String object.

/// A PDF string object holding an arbitrary byte payload.
///
/// The written form is chosen at serialization time: payloads containing
/// `(`, `)`, or `\` go out as a hex string `<..>`, everything else as a
/// literal string `(..)` with the bytes verbatim. Constructors never
/// decide the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PdfString(Vec<u8>);

impl PdfString {
    /// Creates a string from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Attempts to view the payload as UTF-8 text.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Serializes the string in literal or hex form, trailing space.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        if self.needs_hex_form() {
            out.push(b'<');
            for &byte in &self.0 {
                out.extend_from_slice(format!("{:02x}", byte).as_bytes());
            }
            out.push(b'>');
        } else {
            out.push(b'(');
            out.extend_from_slice(&self.0);
            out.push(b')');
        }
        out.push(b' ');
    }

    /// The literal form is used unless the payload contains a byte that
    /// would need backslash escaping.
    fn needs_hex_form(&self) -> bool {
        self.0.iter().any(|&b| matches!(b, b'(' | b')' | b'\\'))
    }
}

impl From<&str> for PdfString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for PdfString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for PdfString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized(s: PdfString) -> Vec<u8> {
        let mut out = Vec::new();
        s.serialize_into(&mut out);
        out
    }

    #[test]
    fn test_plain_payload_is_literal() {
        assert_eq!(serialized(PdfString::from("hello")), b"(hello) ");
    }

    #[test]
    fn test_parenthesis_forces_hex() {
        assert_eq!(serialized(PdfString::from("a(b)c")), b"<6128622963> ");
    }

    #[test]
    fn test_backslash_forces_hex() {
        assert_eq!(serialized(PdfString::from("C:\\path")), b"<433a5c70617468> ");
    }

    #[test]
    fn test_control_bytes_stay_literal() {
        // Only ( ) \ trigger the hex form; other bytes pass through raw.
        assert_eq!(
            serialized(PdfString::new(vec![b'a', 0x00, b'b'])),
            b"(a\x00b) "
        );
    }

    #[test]
    fn test_to_string_lossy() {
        assert_eq!(PdfString::from("Hello").to_string_lossy(), "Hello");
    }
}
