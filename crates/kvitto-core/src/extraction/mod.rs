pub mod pdftotext;
pub mod stream;

use crate::error::KvittoError;

/// A positioned text fragment from one page: the text, the x offset where it
/// starts, and the y offset of its top edge (page units, origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken {
    pub text: String,
    pub x0: f32,
    pub top: f32,
}

impl WordToken {
    pub fn new(text: impl Into<String>, x0: f32, top: f32) -> WordToken {
        WordToken {
            text: text.into(),
            x0,
            top,
        }
    }
}

/// An opened statement document exposing per-page word geometry.
pub trait StatementDocument {
    fn page_count(&self) -> usize;

    /// Word tokens for the zero-based page index, in document order.
    fn words(&self, page_index: usize) -> Result<Vec<WordToken>, KvittoError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// A rectangular grid of cell strings proposed by a table detector.
pub type CandidateGrid = Vec<Vec<String>>;

/// Alternative table detector consulted when geometric reconstruction finds
/// nothing on a page. May return any number of candidates, including none.
pub trait FallbackTableSource {
    fn detect(&self, page_index: usize) -> Result<Vec<CandidateGrid>, KvittoError>;
}
