use serde::{Deserialize, Serialize};

/// Which pages of the document to process. Page numbers are 1-based as the
/// user supplies them; `resolve` turns them into zero-based indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSelection {
    /// Every page in the document.
    All,
    /// An inclusive 1-based range, clipped to the document.
    Range { start: usize, end: usize },
    /// Explicit 1-based page numbers, kept in the caller's order.
    List(Vec<usize>),
}

impl PageSelection {
    /// Resolve to a concrete list of zero-based page indices for a document
    /// with `total` pages. An empty result is valid and means "nothing to
    /// process": an out-of-document range, or a list with no in-range pages.
    ///
    /// The list form filters out-of-range values but never reorders or
    /// deduplicates what the caller asked for.
    pub fn resolve(&self, total: usize) -> Vec<usize> {
        match self {
            PageSelection::All => (0..total).collect(),
            PageSelection::Range { start, end } => {
                let first = start.saturating_sub(1);
                let last = (*end).min(total);
                (first..last).collect()
            }
            PageSelection::List(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total)
                .map(|&p| p - 1)
                .collect(),
        }
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        PageSelection::All
    }
}
