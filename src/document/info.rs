//! PDF document information dictionary.

use crate::object::{Object, PdfDictionary, PdfString};

/// Document metadata for the Info dictionary.
///
/// Build one, write it with `PdfWriter::write_object`, and register the
/// returned reference with `PdfWriter::set_info` so the trailer points at
/// it.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    /// The document's title.
    pub title: Option<String>,
    /// The name of the person who created the document.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords associated with the document.
    pub keywords: Option<String>,
    /// The application that created the original document.
    pub creator: Option<String>,
    /// The application that produced the PDF.
    pub producer: Option<String>,
    /// Creation date, in PDF date format.
    pub creation_date: Option<String>,
    /// Modification date, in PDF date format.
    pub mod_date: Option<String>,
}

impl DocumentInfo {
    /// Creates a new empty document info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the document author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the document subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the document keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Sets the creator application name.
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Sets the producer application name.
    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    /// Sets the creation date.
    pub fn creation_date(mut self, date: impl Into<String>) -> Self {
        self.creation_date = Some(date.into());
        self
    }

    /// Sets the modification date.
    pub fn mod_date(mut self, date: impl Into<String>) -> Self {
        self.mod_date = Some(date.into());
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Converts the set fields to an Info dictionary, in canonical key
    /// order.
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        for (key, value) in self.fields() {
            if let Some(text) = value {
                dict.set(key, Object::String(PdfString::from(text.as_str())));
            }
        }
        dict
    }

    fn fields(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
            ("CreationDate", &self.creation_date),
            ("ModDate", &self.mod_date),
        ]
    }
}
