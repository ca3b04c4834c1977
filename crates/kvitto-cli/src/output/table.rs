use kvitto_core::Table;

/// Render a table as aligned text columns, header first.
pub fn format(table: &Table) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for record in &table.records {
        for (i, value) in record.values.iter().enumerate() {
            if i < widths.len() && value.len() > widths[i] {
                widths[i] = value.len();
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &table.columns, &widths);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separators, &widths);
    for record in &table.records {
        push_row(&mut out, &record.values, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(formatted.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aligns_columns() {
        let columns: Vec<String> = vec!["Receipt No.".into(), "Balance".into()];
        let table = Table::from_rows(
            &columns,
            vec![vec!["QA1".into(), "1,200.00".into()]],
        );
        let rendered = format(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Receipt No.  Balance");
        assert_eq!(lines[1], "-----------  --------");
        assert!(lines[2].starts_with("QA1"));
    }
}
