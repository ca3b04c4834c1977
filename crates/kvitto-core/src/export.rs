use std::path::Path;

use crate::error::KvittoError;
use crate::table::{Record, Table};

/// Write a table as CSV: one header row, one row per record.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), KvittoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for record in &table.records {
        writer.write_record(&record.values)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write only the records with a non-empty value in `column`. Statement
/// exports use this to keep just the rows that carry a balance.
pub fn write_filtered_csv(table: &Table, column: &str, path: &Path) -> Result<(), KvittoError> {
    write_csv(&table.filter_non_empty(column), path)
}

/// Read a previously exported CSV back into a table.
pub fn read_csv(path: &Path) -> Result<Table, KvittoError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::new(row.iter().map(str::to_string).collect()));
    }

    Ok(Table { columns, records })
}
