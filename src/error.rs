//! Error types for the pdf-stitch library.

use thiserror::Error;

/// The main error type for PDF operations.
#[derive(Debug, Error)]
pub enum PdfError {
    /// Error during object serialization.
    #[error("Object error: {0}")]
    Object(#[from] ObjectError),

    /// Error during PDF writing.
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    /// Error during document merging.
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF object serialization.
///
/// These indicate a malformed value handed to the serializer, which is a
/// programming error in the caller; the document being written is not
/// usable afterwards.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// Stream whose `/Length` entry disagrees with its payload.
    #[error("Stream /Length is {declared} but the payload is {actual} bytes")]
    StreamLengthMismatch {
        /// The `/Length` value found in the stream dictionary.
        declared: i64,
        /// The actual payload size in bytes.
        actual: usize,
    },

    /// Stream without an integer `/Length` entry.
    ///
    /// The serializer never synthesizes `/Length`: some streams carry a
    /// length that depends on a downstream filter, and this crate does
    /// not filter.
    #[error("Stream missing required integer /Length entry")]
    StreamMissingLength,
}

/// Errors related to streaming PDF writing.
#[derive(Debug, Error)]
pub enum WriterError {
    /// An emitting operation was invoked outside the `Open` state.
    #[error("Writer is not open")]
    NotOpen,

    /// The underlying byte sink failed. The failure is sticky: the
    /// writer refuses all further emission.
    #[error("Sink write failed: {0}")]
    Sink(#[source] std::io::Error),

    /// `end_document` was called while an object number was still
    /// reserved. Carries the lowest offending object number.
    #[error("Reserved object {0} was never written")]
    UnfulfilledReservation(u32),

    /// `write_reserved_object` was called with a reference that is out
    /// of range, not reserved, or already fulfilled.
    #[error("Object {0} does not name a live reservation")]
    InvalidReservation(u32),
}

/// Errors related to multi-document merging.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The finished output could not atomically replace the destination
    /// file.
    #[error("Failed to commit output file: {0}")]
    Commit(#[source] std::io::Error),

    /// Form field namespacing was requested but is not implemented; the
    /// merger rejects it rather than silently ignoring the flag.
    #[error("Form field namespacing is not supported")]
    FieldNamespacingUnsupported,
}

/// A specialized Result type for PDF operations.
pub type PdfResult<T> = Result<T, PdfError>;
