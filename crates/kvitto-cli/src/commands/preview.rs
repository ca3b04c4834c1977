use std::path::PathBuf;

use kvitto_core::extraction::pdftotext::PdftotextDocument;
use kvitto_core::{extract_statement, statement_schema, ExtractOptions, PageSelection};

use crate::output;

pub fn run(
    input: PathBuf,
    password: Option<String>,
    pages: PageSelection,
    output_format: &str,
    row_height: f32,
) -> Result<(), kvitto_core::KvittoError> {
    let doc = PdftotextDocument::open_path(&input, password.as_deref())?;

    let schema = statement_schema();
    let options = ExtractOptions {
        pages,
        row_quant: row_height,
    };
    let report = extract_statement(&doc, &doc, &schema, &options)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => {
            for failure in &report.failures {
                eprintln!("  page {}: {}", failure.page_number, failure.reason);
            }
            match &report.table {
                Some(table) => print!("{}", output::table::format(table)),
                None => eprintln!("No data was extracted from the selected pages."),
            }
        }
    }

    Ok(())
}
