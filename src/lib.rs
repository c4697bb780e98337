//! # pdf-stitch
//!
//! A streaming PDF writer and multi-document merger.
//!
//! The writer emits each indirect object to its sink the moment the
//! object is supplied, keeping only a compact per-object offset record
//! so the cross-reference table and trailer can be appended at
//! finalization. The sink is strictly append-only. The merger consumes
//! parsed documents one at a time, relabels every indirect reference
//! into the output numbering space, and streams the result through the
//! writer.
//!
//! ## Writing a document
//!
//! ```rust
//! use pdf_stitch::prelude::*;
//!
//! let mut writer = PdfWriter::create_memory();
//! writer.begin_document(PdfVersion::default()).unwrap();
//!
//! let page = writer.reserve_object().unwrap();
//! let mut dict = PdfDictionary::new();
//! dict.set("Type", Object::Name(PdfName::from("Page")));
//! dict.set("MediaBox", vec![0i64, 0, 612, 792]);
//! writer.write_reserved_object(page, &Object::Dictionary(dict)).unwrap();
//!
//! writer.add_page(page);
//! writer.end_document().unwrap();
//!
//! let bytes = writer.into_bytes();
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! ```
//!
//! ## Merging documents
//!
//! ```rust,no_run
//! use pdf_stitch::prelude::*;
//!
//! # fn parsed_documents() -> Vec<SourceDocument> { Vec::new() }
//! let mut merger = PdfMerger::create("merged.pdf").unwrap();
//! for document in parsed_documents() {
//!     merger.append(&document).unwrap();
//! }
//! merger.finish().unwrap();
//! ```

pub mod document;
pub mod error;
pub mod merger;
pub mod object;
pub mod rewrite;
pub mod types;
pub mod writer;

pub use document::{DocumentInfo, PdfVersion, SourceDocument, SourceObject};
pub use error::{MergeError, ObjectError, PdfError, PdfResult, WriterError};
pub use merger::PdfMerger;
pub use object::{
    DictionaryBuilder, Object, PdfArray, PdfDictionary, PdfName, PdfStream, PdfString,
    StreamBuilder,
};
pub use rewrite::{rewrite_references, ReferenceMap};
pub use types::ObjectId;
pub use writer::{PdfWriter, WriterState};

/// Prelude module for convenient imports.
///
/// Use `use pdf_stitch::prelude::*;` to import the commonly used types.
pub mod prelude {
    pub use crate::document::{DocumentInfo, PdfVersion, SourceDocument, SourceObject};
    pub use crate::error::{MergeError, ObjectError, PdfError, PdfResult, WriterError};
    pub use crate::merger::PdfMerger;
    pub use crate::object::{
        DictionaryBuilder, Object, PdfArray, PdfDictionary, PdfName, PdfStream, PdfString,
        StreamBuilder,
    };
    pub use crate::rewrite::{rewrite_references, ReferenceMap};
    pub use crate::types::ObjectId;
    pub use crate::writer::{PdfWriter, WriterState};
}
