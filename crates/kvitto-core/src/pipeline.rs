use serde::Serialize;

use crate::error::KvittoError;
use crate::extraction::{FallbackTableSource, StatementDocument};
use crate::grid::{reconstruct_page, DEFAULT_ROW_QUANT};
use crate::pages::PageSelection;
use crate::sanitize::clean;
use crate::schema::ColumnSchema;
use crate::table::Table;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub pages: PageSelection,
    /// Vertical bucket width for row grouping, in page units. Tune down for
    /// statements with tighter line spacing.
    pub row_quant: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            pages: PageSelection::All,
            row_quant: DEFAULT_ROW_QUANT,
        }
    }
}

/// One page that failed to extract. Recoverable: the page contributes no
/// rows and the run continues.
#[derive(Debug, Clone, Serialize)]
pub struct PageFailure {
    /// 1-based, as shown to the user.
    pub page_number: usize,
    pub reason: String,
}

/// Outcome of a full extraction run.
///
/// `table` is `None` when no page produced any rows, which is a normal
/// terminal state, not an error. Per-page failures are carried as values so
/// the caller decides how to surface them.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    pub table: Option<Table>,
    /// 1-based page numbers that were attempted, in processing order.
    pub pages_processed: Vec<usize>,
    pub failures: Vec<PageFailure>,
}

/// Run the full extraction: resolve pages, reconstruct each one (falling
/// back to the stream detector when geometry yields nothing), accumulate in
/// page order, then sanitize the merged table once more to drop header rows
/// re-introduced at page boundaries.
///
/// Only document-level failures abort the run; anything that goes wrong on
/// a single page is recorded in the report and the loop moves on. A failed
/// primary extraction counts as "no result" for that page, so the fallback
/// detector is still consulted.
pub fn extract(
    doc: &dyn StatementDocument,
    fallback: &dyn FallbackTableSource,
    schema: &ColumnSchema,
    options: &ExtractOptions,
) -> Result<ExtractionReport, KvittoError> {
    let indices = options.pages.resolve(doc.page_count());

    let mut accumulated: Vec<Table> = Vec::new();
    let mut failures: Vec<PageFailure> = Vec::new();

    for &idx in &indices {
        match primary_table(doc, schema, options.row_quant, idx) {
            Ok(Some(table)) => {
                accumulated.push(table);
                continue;
            }
            Ok(None) => {}
            Err(e) => failures.push(PageFailure {
                page_number: idx + 1,
                reason: e.to_string(),
            }),
        }

        match fallback_tables(fallback, schema, idx) {
            Ok(tables) => accumulated.extend(tables),
            Err(e) => failures.push(PageFailure {
                page_number: idx + 1,
                reason: e.to_string(),
            }),
        }
    }

    let table = if accumulated.is_empty() {
        None
    } else {
        let merged = Table::concat(schema.names(), accumulated);
        Some(clean(merged, schema))
    };

    Ok(ExtractionReport {
        table,
        pages_processed: indices.iter().map(|i| i + 1).collect(),
        failures,
    })
}

/// Geometric extraction for one page. `Ok(None)` means "no usable result"
/// (empty page, or everything sanitized away) and sends the caller to the
/// fallback branch.
fn primary_table(
    doc: &dyn StatementDocument,
    schema: &ColumnSchema,
    row_quant: f32,
    page_index: usize,
) -> Result<Option<Table>, KvittoError> {
    let words = doc.words(page_index)?;

    match reconstruct_page(&words, schema, row_quant) {
        Some(raw) => {
            let cleaned = clean(raw, schema);
            if cleaned.is_empty() {
                // Header-only or all-blank page.
                Ok(None)
            } else {
                Ok(Some(cleaned))
            }
        }
        None => Ok(None),
    }
}

/// Sanitized tables from every accepted fallback candidate on one page.
/// Candidates must be rectangular with exactly the schema's column count;
/// anything else is a structural mismatch, silently discarded.
fn fallback_tables(
    fallback: &dyn FallbackTableSource,
    schema: &ColumnSchema,
    page_index: usize,
) -> Result<Vec<Table>, KvittoError> {
    let mut tables = Vec::new();
    for grid in fallback.detect(page_index)? {
        if grid.is_empty() || grid.iter().any(|row| row.len() != schema.len()) {
            continue;
        }
        let cleaned = clean(Table::from_rows(schema.names(), grid), schema);
        if !cleaned.is_empty() {
            tables.push(cleaned);
        }
    }
    Ok(tables)
}
