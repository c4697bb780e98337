//! Streaming multi-document merger.

use crate::document::{PdfVersion, SourceDocument, SourceObject};
use crate::error::{MergeError, PdfResult};
use crate::rewrite::{rewrite_references, ReferenceMap};
use crate::types::ObjectId;
use crate::writer::PdfWriter;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Merges parsed documents into a single output file, one at a time.
///
/// Each appended document is transplanted in two passes: a reserve pass
/// that allocates one output object number per live source object, and an
/// emit pass that relabels every indirect reference through the resulting
/// mapping and streams the objects out. Nothing of a source document is
/// retained once `append` returns, so peak memory is bounded by the
/// largest single input.
///
/// The output is written to a temporary file next to the destination and
/// atomically renamed into place by [`finish`](Self::finish); an
/// abandoned merge never replaces an existing destination.
pub struct PdfMerger {
    writer: PdfWriter<BufWriter<NamedTempFile>>,
    destination: PathBuf,
    documents: usize,
    pages: usize,
}

impl PdfMerger {
    /// Opens a merger writing to `path`, with the default PDF version.
    pub fn create(path: impl AsRef<Path>) -> PdfResult<Self> {
        Self::create_with_version(path, PdfVersion::default())
    }

    /// Opens a merger writing to `path` with an explicit header version.
    pub fn create_with_version(path: impl AsRef<Path>, version: PdfVersion) -> PdfResult<Self> {
        let destination = path.as_ref().to_path_buf();
        let directory = destination
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp = NamedTempFile::new_in(directory)?;

        let mut writer = PdfWriter::new(BufWriter::new(temp));
        writer.begin_document(version)?;

        Ok(Self {
            writer,
            destination,
            documents: 0,
            pages: 0,
        })
    }

    /// Transplants every live object of `document` into the output and
    /// appends its pages.
    pub fn append(&mut self, document: &SourceDocument) -> PdfResult<()> {
        self.append_with_fields(document, false)
    }

    /// Like [`append`](Self::append). `namespace_fields` is a hook for
    /// form-field renaming across documents; it is not implemented and is
    /// rejected when set rather than silently ignored.
    pub fn append_with_fields(
        &mut self,
        document: &SourceDocument,
        namespace_fields: bool,
    ) -> PdfResult<()> {
        if namespace_fields {
            return Err(MergeError::FieldNamespacingUnsupported.into());
        }

        let occupied: Vec<(ObjectId, &SourceObject)> = document
            .slots()
            .filter_map(|(number, slot)| {
                slot.map(|source| (ObjectId::with_generation(number, source.generation), source))
            })
            .collect();

        // Reserve pass: one output number per live source object. Free
        // slots leave no mapping entry. All transplants land at
        // generation 0; the output is a fresh document with no prior
        // revisions.
        let mut mapping = ReferenceMap::with_capacity(occupied.len());
        for (old, _) in &occupied {
            mapping.insert(*old, self.writer.reserve_object()?);
        }

        // Emit pass, in the same slot order.
        for (old, source) in &occupied {
            let relabeled = rewrite_references(&source.value, &mapping);
            self.writer.write_reserved_object(mapping[old], &relabeled)?;
        }

        let mut appended = 0usize;
        for page in document.pages() {
            match mapping.get(page) {
                Some(&destination) => {
                    self.writer.add_page(destination);
                    appended += 1;
                }
                // A page reference with no live object slot indicates an
                // inconsistent source document.
                None => warn!(
                    number = page.number,
                    generation = page.generation,
                    "dropping page with no transplanted object"
                ),
            }
        }

        self.pages += appended;
        self.documents += 1;
        debug!(
            index = self.documents - 1,
            objects = occupied.len(),
            pages = appended,
            "document transplanted"
        );
        Ok(())
    }

    /// Returns the number of documents appended so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Returns the number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Finalizes the output and atomically replaces the destination.
    ///
    /// On any failure the temporary file is discarded and the
    /// destination is left as it was.
    pub fn finish(self) -> PdfResult<()> {
        let mut writer = self.writer;
        writer.end_document()?;

        let buffered = writer.into_inner();
        let temp = buffered
            .into_inner()
            .map_err(|error| MergeError::Commit(error.into_error()))?;
        temp.persist(&self.destination)
            .map_err(|error| MergeError::Commit(error.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::object::{Object, PdfDictionary, PdfName};

    fn one_page_document() -> SourceDocument {
        let mut doc = SourceDocument::new();
        let mut page = PdfDictionary::new();
        page.set("Type", Object::Name(PdfName::from("Page")));
        let page_ref = doc.push_object(Object::Dictionary(page));
        doc.add_page(page_ref);
        doc
    }

    #[test]
    fn test_namespacing_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut merger = PdfMerger::create(dir.path().join("out.pdf")).unwrap();
        let doc = one_page_document();

        assert!(matches!(
            merger.append_with_fields(&doc, true),
            Err(PdfError::Merge(MergeError::FieldNamespacingUnsupported))
        ));
        // The rejected call transplanted nothing.
        assert_eq!(merger.document_count(), 0);
    }

    #[test]
    fn test_counters() {
        let dir = tempfile::tempdir().unwrap();
        let mut merger = PdfMerger::create(dir.path().join("out.pdf")).unwrap();

        merger.append(&one_page_document()).unwrap();
        merger.append(&one_page_document()).unwrap();
        assert_eq!(merger.document_count(), 2);
        assert_eq!(merger.page_count(), 2);
    }

    #[test]
    fn test_inconsistent_page_reference_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut merger = PdfMerger::create(dir.path().join("out.pdf")).unwrap();

        let mut doc = one_page_document();
        doc.add_page(ObjectId::new(42));
        merger.append(&doc).unwrap();
        assert_eq!(merger.page_count(), 1);
    }

    #[test]
    fn test_abandoned_merge_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        {
            let mut merger = PdfMerger::create(&output).unwrap();
            merger.append(&one_page_document()).unwrap();
            // Dropped without finish().
        }
        assert!(!output.exists());
    }
}
