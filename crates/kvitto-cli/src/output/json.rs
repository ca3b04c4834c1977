use kvitto_core::{ExtractionReport, KvittoError};

pub fn print(report: &ExtractionReport) -> Result<(), KvittoError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
