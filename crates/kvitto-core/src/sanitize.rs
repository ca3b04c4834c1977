use crate::schema::ColumnSchema;
use crate::table::Table;

/// Clean a raw table against its schema: drop re-detected header rows and
/// fully empty rows, keeping the remaining records in order.
///
/// A header row is recognized by its FIRST column alone equalling the
/// schema's first column name. Data that happens to repeat header text in
/// other columns is never touched. Idempotent.
pub fn clean(table: Table, schema: &ColumnSchema) -> Table {
    if table.is_empty() {
        return Table::empty(schema.names());
    }

    let header = schema.first_name();
    let records = table
        .records
        .into_iter()
        .filter(|r| r.values.first().map(String::as_str) != Some(header))
        .filter(|r| !r.is_blank())
        .collect();

    Table {
        columns: schema.names().to_vec(),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnSchema;
    use crate::table::Table;

    fn schema() -> ColumnSchema {
        ColumnSchema::new(vec!["Receipt No.", "Details"], vec![0.0, 100.0]).unwrap()
    }

    fn table(rows: &[&[&str]]) -> Table {
        let columns: Vec<String> = vec!["Receipt No.".into(), "Details".into()];
        Table::from_rows(
            &columns,
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_empty_input_yields_empty_table_with_schema_columns() {
        let cleaned = clean(Table::empty(&[]), &schema());
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.columns, schema().names());
    }

    #[test]
    fn test_drops_repeated_header_rows() {
        let cleaned = clean(
            table(&[
                &["Receipt No.", "Details"],
                &["QA12", "Sent to Alice"],
                &["Receipt No.", "Details"],
            ]),
            &schema(),
        );
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.records[0].values[0], "QA12");
    }

    #[test]
    fn test_header_match_is_first_column_only() {
        // Header text appearing in a later column is data, not a header row.
        let cleaned = clean(table(&[&["QA13", "Receipt No."]]), &schema());
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_drops_blank_rows() {
        let cleaned = clean(table(&[&["", " "], &["QA14", "x"], &["", ""]]), &schema());
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_header_only_table_sanitizes_to_empty() {
        let cleaned = clean(table(&[&["Receipt No.", "Details"]]), &schema());
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = clean(
            table(&[&["Receipt No.", "Details"], &["QA15", "y"], &["", ""]]),
            &schema(),
        );
        let twice = clean(once.clone(), &schema());
        assert_eq!(once, twice);
    }
}
