#[derive(Debug, thiserror::Error)]
pub enum KvittoError {
    #[error("could not open document: {0}")]
    DocumentAccess(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("word extraction failed: {0}")]
    Extraction(String),

    #[error("invalid column schema: {0}")]
    InvalidSchema(String),

    #[error("no such page index {index} (document has {total} pages)")]
    PageOutOfRange { index: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
