//! Byte-level output with position tracking.

use crate::document::PdfVersion;
use std::io::{self, Write};

/// Append-only byte sink wrapping the output writer.
///
/// Tracks the count of bytes successfully written since creation, which
/// becomes the cross-reference offset of whatever is written next. A
/// failed write is sticky: every later operation fails until the value
/// is discarded.
pub struct Serializer<W: Write> {
    writer: W,
    position: u64,
    failed: bool,
}

impl<W: Write> Serializer<W> {
    /// Creates a new serializer wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            failed: false,
        }
    }

    /// Returns the current byte position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns true once a write has failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Writes bytes and advances the position.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.check_not_failed()?;
        if let Err(error) = self.writer.write_all(bytes) {
            self.failed = true;
            return Err(error);
        }
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Writes a string and advances the position.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Writes the document prologue: version line, producer comment,
    /// binary marker, blank line.
    pub fn write_header(&mut self, version: PdfVersion) -> io::Result<()> {
        self.write_str(&format!("%PDF-{}\r\n", version))?;
        self.write_str(&format!(
            "% PDF producer: {} {}\r\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))?;
        self.write_bytes(b"%\xE2\xE3\xCF\xD3\r\n")?;
        self.write_bytes(b"\r\n")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.check_not_failed()?;
        if let Err(error) = self.writer.flush() {
            self.failed = true;
            return Err(error);
        }
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_not_failed(&self) -> io::Result<()> {
        if self.failed {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "sink is in failed state",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A writer that fails after a fixed number of accepted bytes.
    struct FailAfter {
        remaining: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "full"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_position_tracking() {
        let mut serializer = Serializer::new(Vec::new());
        assert_eq!(serializer.position(), 0);
        serializer.write_str("Hello").unwrap();
        assert_eq!(serializer.position(), 5);
        serializer.write_bytes(b", World").unwrap();
        assert_eq!(serializer.position(), 12);
    }

    #[test]
    fn test_header_layout() {
        let mut serializer = Serializer::new(Vec::new());
        serializer.write_header(PdfVersion::V1_7).unwrap();
        let out = serializer.into_inner();

        assert!(out.starts_with(b"%PDF-1.7\r\n% PDF producer: "));
        assert!(out.ends_with(b"%\xE2\xE3\xCF\xD3\r\n\r\n"));
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut serializer = Serializer::new(FailAfter { remaining: 3 });
        assert!(serializer.write_bytes(b"too many bytes").is_err());
        assert!(serializer.is_failed());
        // A write the sink could now accept still fails.
        assert!(serializer.write_bytes(b"").is_err());
        assert!(serializer.flush().is_err());
    }
}
