use std::path::PathBuf;

use kvitto_core::extraction::pdftotext::PdftotextDocument;
use kvitto_core::extraction::StatementDocument;
use kvitto_core::{export, extract_statement, statement_schema, ExtractOptions, PageSelection};

pub fn run(
    input: PathBuf,
    out: PathBuf,
    password: Option<String>,
    pages: PageSelection,
    filtered: bool,
    row_height: f32,
) -> Result<(), kvitto_core::KvittoError> {
    let doc = PdftotextDocument::open_path(&input, password.as_deref())?;
    eprintln!("Total pages in document: {}", doc.page_count());

    let schema = statement_schema();
    let options = ExtractOptions {
        pages,
        row_quant: row_height,
    };
    let report = extract_statement(&doc, &doc, &schema, &options)?;

    for failure in &report.failures {
        eprintln!("  page {}: {}", failure.page_number, failure.reason);
    }

    match report.table {
        Some(table) => {
            if filtered {
                export::write_filtered_csv(&table, schema.last_name(), &out)?;
            } else {
                export::write_csv(&table, &out)?;
            }
            eprintln!(
                "{} record(s) extracted, written to {}",
                table.len(),
                out.display()
            );
        }
        None => {
            eprintln!("No data was extracted from the selected pages.");
        }
    }

    Ok(())
}
