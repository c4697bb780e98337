//! Streaming PDF document writer.
//!
//! Objects are emitted to the sink the moment they are supplied; the
//! writer retains only a per-object offset record so the cross-reference
//! table and trailer can be appended at finalization. The sink is never
//! seeked, which keeps pipe and network outputs valid targets.

mod serializer;
mod xref;

pub use serializer::Serializer;

use xref::XrefTable;

use crate::document::PdfVersion;
use crate::error::{PdfResult, WriterError};
use crate::object::{Object, PdfDictionary, PdfName};
use crate::types::ObjectId;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Lifecycle of a [`PdfWriter`].
///
/// Every emitting operation requires `Open`; queries are valid in any
/// state. A sink failure moves the writer to `Failed` permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Constructed, document prologue not yet written.
    Created,
    /// Prologue written; objects may be emitted.
    Open,
    /// Finalized; the trailer has been written.
    Closed,
    /// The sink failed; nothing more can be written.
    Failed,
}

/// A streaming PDF writer over an append-only sink.
pub struct PdfWriter<W: Write> {
    serializer: Serializer<W>,
    xref: XrefTable,
    pages: Vec<ObjectId>,
    catalog: Option<ObjectId>,
    info: Option<ObjectId>,
    state: WriterState,
}

impl<W: Write> PdfWriter<W> {
    /// Creates a new writer over the given sink.
    pub fn new(writer: W) -> Self {
        Self {
            serializer: Serializer::new(writer),
            xref: XrefTable::new(),
            pages: Vec::new(),
            catalog: None,
            info: None,
            state: WriterState::Created,
        }
    }

    /// Returns the writer's lifecycle state.
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Returns the byte position the next write would land at.
    pub fn position(&self) -> u64 {
        self.serializer.position()
    }

    /// Returns the number of allocated object numbers (reserved ones
    /// included, slot 0 excluded).
    pub fn object_count(&self) -> u32 {
        self.xref.len() - 1
    }

    /// Returns the number of pages registered so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Writes the document prologue and opens the writer.
    pub fn begin_document(&mut self, version: PdfVersion) -> PdfResult<()> {
        if self.state != WriterState::Created {
            return Err(WriterError::NotOpen.into());
        }
        let result = self.serializer.write_header(version);
        self.check_sink(result)?;
        self.state = WriterState::Open;
        tracing::trace!(%version, "document opened");
        Ok(())
    }

    /// Writes an indirect object at the next object number, generation 0,
    /// and returns its reference.
    pub fn write_object(&mut self, object: &Object) -> PdfResult<ObjectId> {
        self.write_object_with_generation(object, 0)
    }

    /// Writes an indirect object at the next object number with an
    /// explicit generation.
    pub fn write_object_with_generation(
        &mut self,
        object: &Object,
        generation: u16,
    ) -> PdfResult<ObjectId> {
        self.ensure_open()?;
        // Serialize before allocating so a structural error leaves both
        // the sink and the offset table untouched.
        let body = object.to_pdf_bytes()?;
        let number = self.xref.allocate(generation, false);
        let id = ObjectId::with_generation(number, generation);
        let offset = self.emit_indirect(id, &body)?;
        self.xref.record(number, offset);
        Ok(id)
    }

    /// Allocates the next object number without writing anything, for an
    /// object whose bytes come later. Required when two objects must
    /// reference each other.
    pub fn reserve_object(&mut self) -> PdfResult<ObjectId> {
        self.reserve_object_with_generation(0)
    }

    /// Reserves the next object number with an explicit generation.
    pub fn reserve_object_with_generation(&mut self, generation: u16) -> PdfResult<ObjectId> {
        self.ensure_open()?;
        let number = self.xref.allocate(generation, true);
        Ok(ObjectId::with_generation(number, generation))
    }

    /// Writes the object for a previously reserved reference, recording
    /// its offset now.
    pub fn write_reserved_object(&mut self, id: ObjectId, object: &Object) -> PdfResult<()> {
        self.ensure_open()?;
        if !self.xref.is_reserved(id.number, id.generation) {
            return Err(WriterError::InvalidReservation(id.number).into());
        }
        let body = object.to_pdf_bytes()?;
        let offset = self.emit_indirect(id, &body)?;
        self.xref.record(id.number, offset);
        Ok(())
    }

    /// Appends a page reference. The referent is not validated.
    pub fn add_page(&mut self, page: ObjectId) {
        self.pages.push(page);
    }

    /// Overrides the catalog reference; suppresses catalog synthesis at
    /// finalization.
    pub fn set_catalog(&mut self, id: ObjectId) {
        self.catalog = Some(id);
    }

    /// Sets the Info dictionary reference for the trailer.
    pub fn set_info(&mut self, id: ObjectId) {
        self.info = Some(id);
    }

    /// Finalizes the document: synthesizes the page tree and catalog if
    /// none was set, then emits the cross-reference table, trailer,
    /// startxref, and EOF marker.
    ///
    /// Fails with `UnfulfilledReservation` before emitting anything if a
    /// reserved object was never written.
    pub fn end_document(&mut self) -> PdfResult<()> {
        self.ensure_open()?;
        if let Some(number) = self.xref.first_reserved() {
            return Err(WriterError::UnfulfilledReservation(number).into());
        }

        let root = match self.catalog {
            Some(id) => id,
            None => {
                let mut tree = PdfDictionary::new();
                tree.set("Type", Object::Name(PdfName::from("Pages")));
                tree.set(
                    "Kids",
                    self.pages.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
                );
                tree.set("Count", Object::Integer(self.pages.len() as i64));
                let tree_id = self.write_object(&Object::Dictionary(tree))?;

                let mut catalog = PdfDictionary::new();
                catalog.set("Type", Object::Name(PdfName::from("Catalog")));
                catalog.set("Pages", Object::Reference(tree_id));
                let catalog_id = self.write_object(&Object::Dictionary(catalog))?;
                self.catalog = Some(catalog_id);
                catalog_id
            }
        };

        let xref_offset = self.serializer.position();
        let mut table = Vec::new();
        self.xref.write_table(&mut table);
        self.sink_write(&table)?;

        let mut trailer = PdfDictionary::new();
        trailer.set("Size", Object::Integer(self.xref.len() as i64));
        trailer.set("Root", Object::Reference(root));
        if let Some(info) = self.info {
            trailer.set("Info", Object::Reference(info));
        }
        let trailer_dict = Object::Dictionary(trailer).to_pdf_bytes()?;

        self.sink_write(b"trailer\r\n")?;
        self.sink_write(&trailer_dict)?;
        self.sink_write(b"\r\nstartxref\r\n")?;
        self.sink_write(format!("{}\r\n", xref_offset).as_bytes())?;
        self.sink_write(b"%%EOF")?;

        let result = self.serializer.flush();
        self.check_sink(result)?;
        self.state = WriterState::Closed;
        tracing::trace!(
            objects = self.object_count(),
            pages = self.pages.len(),
            "document finalized"
        );
        Ok(())
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.serializer.into_inner()
    }

    fn ensure_open(&self) -> Result<(), WriterError> {
        if self.state == WriterState::Open {
            Ok(())
        } else {
            Err(WriterError::NotOpen)
        }
    }

    /// Writes one indirect object frame and returns the offset of its
    /// `N G obj` header.
    fn emit_indirect(&mut self, id: ObjectId, body: &[u8]) -> PdfResult<u64> {
        let offset = self.serializer.position();
        self.sink_write(format!("{} {} obj\r\n", id.number, id.generation).as_bytes())?;
        self.sink_write(body)?;
        self.sink_write(b"endobj\r\n")?;
        Ok(offset)
    }

    fn sink_write(&mut self, bytes: &[u8]) -> PdfResult<()> {
        let result = self.serializer.write_bytes(bytes);
        self.check_sink(result)
    }

    fn check_sink(&mut self, result: std::io::Result<()>) -> PdfResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => {
                self.state = WriterState::Failed;
                Err(WriterError::Sink(error).into())
            }
        }
    }
}

impl PdfWriter<BufWriter<File>> {
    /// Creates a writer over a newly created file.
    pub fn create_file(path: impl AsRef<Path>) -> PdfResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl PdfWriter<Vec<u8>> {
    /// Creates a writer over an in-memory buffer.
    pub fn create_memory() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.into_inner()
    }
}
