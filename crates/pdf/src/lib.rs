//! Page-text access over a scanned-diary PDF.
//!
//! The pipeline only needs one thing from a document: "give me page N as
//! plain text". That contract lives in the [`PageSource`] trait so the
//! scanning loop can be driven by fixture pages in tests without touching
//! lopdf; [`LopdfSource`] is the real implementation.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// PageSource trait
// ---------------------------------------------------------------------------

/// A paginated text-bearing document.
///
/// Pages are 1-based. A page that does not exist or yields no extractable
/// text comes back as the empty string; per-page extraction failures are
/// never errors (the scan silently skips such pages).
pub trait PageSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracted plain text for a 1-based page number.
    fn page_text(&self, page: u32) -> String;
}

/// In-memory page list. Fixture implementation for pipeline tests.
#[derive(Debug, Clone, Default)]
pub struct FixturePages {
    pages: Vec<String>,
}

impl FixturePages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageSource for FixturePages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: u32) -> String {
        let index = page.checked_sub(1).map(|i| i as usize);
        index
            .and_then(|i| self.pages.get(i))
            .cloned()
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// LopdfSource
// ---------------------------------------------------------------------------

/// Concrete [`PageSource`] backed by [`lopdf::Document`].
pub struct LopdfSource {
    doc: lopdf::Document,
}

impl LopdfSource {
    /// Load a PDF from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let doc =
            lopdf::Document::load(path.as_ref()).map_err(|e| PdfError::Parse(e.to_string()))?;
        Self::from_doc(doc)
    }

    /// Parse a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PdfError> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        Self::from_doc(doc)
    }

    fn from_doc(doc: lopdf::Document) -> Result<Self, PdfError> {
        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        Ok(Self { doc })
    }
}

impl PageSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn page_text(&self, page: u32) -> String {
        // Extraction failures (missing page, undecodable content stream)
        // read as an empty page.
        self.doc.extract_text(&[page]).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
