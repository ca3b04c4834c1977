pub mod error;
pub mod export;
pub mod extraction;
pub mod grid;
pub mod pages;
pub mod pipeline;
pub mod sanitize;
pub mod schema;
pub mod table;

pub use error::KvittoError;
pub use pages::PageSelection;
pub use pipeline::{ExtractOptions, ExtractionReport, PageFailure};
pub use schema::{statement_schema, ColumnSchema};
pub use table::{Record, Table};

use extraction::{FallbackTableSource, StatementDocument};

/// Main API entry point: extract the statement table from an opened
/// document.
///
/// Runs the geometric reconstruction page by page, consulting `fallback`
/// for pages where geometry yields nothing, and returns the merged,
/// sanitized table plus per-page diagnostics. `report.table` is `None`
/// when nothing was extracted; that is a normal outcome, distinct from the
/// document-level errors this function returns as `Err`.
pub fn extract_statement(
    doc: &dyn StatementDocument,
    fallback: &dyn FallbackTableSource,
    schema: &ColumnSchema,
    options: &ExtractOptions,
) -> Result<ExtractionReport, KvittoError> {
    pipeline::extract(doc, fallback, schema, options)
}
