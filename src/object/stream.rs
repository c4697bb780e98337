//! PDF Stream object.

use super::{Object, PdfDictionary, PdfName};
use crate::error::ObjectError;

/// A PDF stream object: a header dictionary plus an opaque byte payload.
///
/// ```text
/// << /Length 123 >> stream
/// ...payload...
/// endstream
/// ```
///
/// The dictionary must carry a `/Length` equal to the payload byte count.
/// The serializer checks the agreement and never re-derives the value,
/// because some streams deliberately declare a length that depends on a
/// downstream filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    /// The stream dictionary.
    pub dictionary: PdfDictionary,
    /// The raw payload bytes.
    pub data: Vec<u8>,
}

impl PdfStream {
    /// Creates a stream over the given payload, setting `/Length`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self::with_dictionary(PdfDictionary::new(), data)
    }

    /// Creates a stream with a custom dictionary; `/Length` is set from
    /// the payload, overwriting any existing entry.
    pub fn with_dictionary(mut dictionary: PdfDictionary, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        dictionary.set("Length", Object::Integer(data.len() as i64));
        Self { dictionary, data }
    }

    /// Creates a stream from a dictionary and payload without touching
    /// the dictionary. The caller is responsible for `/Length`.
    pub fn from_raw(dictionary: PdfDictionary, data: Vec<u8>) -> Self {
        Self { dictionary, data }
    }

    /// Sets the `/Filter` entry.
    pub fn add_filter(&mut self, filter: &str) {
        self.dictionary
            .set("Filter", Object::Name(PdfName::from(filter)));
    }

    /// Returns the payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if a `/Filter` is set.
    pub fn is_compressed(&self) -> bool {
        self.dictionary.get("Filter").is_some()
    }

    /// Serializes the full stream: dictionary, `stream` keyword, payload,
    /// `endstream` keyword.
    ///
    /// Fails when the declared `/Length` is missing or disagrees with the
    /// payload.
    pub fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), ObjectError> {
        let declared = match self.dictionary.get("Length") {
            Some(Object::Integer(n)) => *n,
            _ => return Err(ObjectError::StreamMissingLength),
        };
        if declared != self.data.len() as i64 {
            return Err(ObjectError::StreamLengthMismatch {
                declared,
                actual: self.data.len(),
            });
        }

        self.dictionary.serialize_into(out)?;
        out.extend_from_slice(b"stream\r\n");
        out.extend_from_slice(&self.data);
        out.extend_from_slice(b"\r\nendstream\r\n");
        Ok(())
    }

    /// Compresses the payload with Flate, updating `/Length` and setting
    /// `/Filter /FlateDecode`. Already filtered streams pass through.
    #[cfg(feature = "compression")]
    pub fn with_compression(mut self) -> std::io::Result<Self> {
        use flate2::write::ZlibEncoder;
        use flate2::Compression;
        use std::io::Write;

        if self.is_compressed() {
            return Ok(self);
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&self.data)?;
        self.data = encoder.finish()?;

        self.dictionary
            .set("Length", Object::Integer(self.data.len() as i64));
        self.dictionary
            .set("Filter", Object::Name(PdfName::from("FlateDecode")));
        Ok(self)
    }

    /// Decompresses a FlateDecode payload; other streams come back as-is.
    #[cfg(feature = "compression")]
    pub fn decompress(&self) -> std::io::Result<Vec<u8>> {
        use flate2::read::ZlibDecoder;
        use std::io::Read;

        let is_flate = match self.dictionary.get("Filter") {
            Some(Object::Name(name)) => name.as_bytes() == b"FlateDecode",
            _ => false,
        };
        if !is_flate {
            return Ok(self.data.clone());
        }

        let mut decoder = ZlibDecoder::new(&self.data[..]);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    }
}

/// Builder for creating PDF streams fluently.
#[derive(Debug, Default)]
pub struct StreamBuilder {
    dictionary: PdfDictionary,
    data: Vec<u8>,
}

impl StreamBuilder {
    /// Creates a new stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload from bytes.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the payload from text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.data = text.into().into_bytes();
        self
    }

    /// Sets a dictionary entry.
    pub fn set(mut self, key: impl Into<PdfName>, value: impl Into<Object>) -> Self {
        self.dictionary.set(key, value);
        self
    }

    /// Sets the `/Filter` entry.
    pub fn filter(mut self, filter: &str) -> Self {
        self.dictionary
            .set("Filter", Object::Name(PdfName::from(filter)));
        self
    }

    /// Builds the stream with `/Length` set from the payload.
    pub fn build(self) -> PdfStream {
        PdfStream::with_dictionary(self.dictionary, self.data)
    }
}
