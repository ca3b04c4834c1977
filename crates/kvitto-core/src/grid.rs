use std::collections::BTreeMap;

use crate::extraction::WordToken;
use crate::schema::ColumnSchema;
use crate::table::Table;

/// Default vertical bucket width, in page units. Statement rows separate by
/// more than this; anything printed closer together merges into one row.
pub const DEFAULT_ROW_QUANT: f32 = 10.0;

/// Quantized vertical bucket: all tokens whose top offset falls in the same
/// `row_quant`-wide band share a key and land on the same reconstructed row.
fn row_key(top: f32, row_quant: f32) -> i64 {
    (top / row_quant).floor() as i64
}

/// Reconstruct a page's table from positioned words, without grid lines.
///
/// Each token is bucketed by quantized top offset (row) and by which
/// boundary interval contains its x0 (column). Tokens left of the first
/// boundary match no column and are dropped. Within a cell, token texts keep
/// encounter order and are joined with single spaces, then trimmed.
///
/// Returns `None` when the page produces no rows at all, so the caller can
/// tell "nothing reconstructable here" apart from an empty table and try a
/// fallback detector instead.
pub fn reconstruct_page(
    words: &[WordToken],
    schema: &ColumnSchema,
    row_quant: f32,
) -> Option<Table> {
    let width = schema.len();
    let mut rows: BTreeMap<i64, Vec<Vec<&str>>> = BTreeMap::new();

    for word in words {
        let Some(col) = schema.column_for(word.x0) else {
            continue;
        };
        let key = row_key(word.top, row_quant);
        let cells = rows.entry(key).or_insert_with(|| vec![Vec::new(); width]);
        cells[col].push(word.text.as_str());
    }

    if rows.is_empty() {
        return None;
    }

    // BTreeMap iteration gives ascending keys, i.e. top-to-bottom rows.
    let data_rows: Vec<Vec<String>> = rows
        .into_values()
        .map(|cells| {
            cells
                .into_iter()
                .map(|tokens| tokens.join(" ").trim().to_string())
                .collect()
        })
        .collect();

    Some(Table::from_rows(schema.names(), data_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnSchema;

    fn schema3() -> ColumnSchema {
        ColumnSchema::new(vec!["A", "B", "C"], vec![0.0, 10.0, 20.0]).unwrap()
    }

    #[test]
    fn test_tokens_bin_into_columns() {
        let words = vec![
            WordToken::new("H1", 1.0, 0.0),
            WordToken::new("H2", 11.0, 0.0),
        ];
        let table = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].values, vec!["H1", "H2", ""]);
    }

    #[test]
    fn test_close_tops_share_a_row() {
        // 100 and 109 fall in the same 10-unit band; 121 starts a new row.
        let words = vec![
            WordToken::new("a", 1.0, 100.0),
            WordToken::new("b", 11.0, 109.0),
            WordToken::new("c", 1.0, 121.0),
        ];
        let table = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].values, vec!["a", "b", ""]);
        assert_eq!(table.records[1].values, vec!["c", "", ""]);
    }

    #[test]
    fn test_rows_emitted_top_to_bottom() {
        let words = vec![
            WordToken::new("low", 1.0, 200.0),
            WordToken::new("high", 1.0, 50.0),
        ];
        let table = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(table.records[0].values[0], "high");
        assert_eq!(table.records[1].values[0], "low");
    }

    #[test]
    fn test_cell_tokens_join_in_encounter_order() {
        let words = vec![
            WordToken::new("Sent", 1.0, 40.0),
            WordToken::new("to", 2.0, 40.0),
            WordToken::new("Alice", 3.0, 41.0),
        ];
        let table = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(table.records[0].values[0], "Sent to Alice");
    }

    #[test]
    fn test_token_left_of_first_boundary_dropped() {
        let schema = ColumnSchema::new(vec!["A", "B"], vec![37.5, 85.0]).unwrap();
        let words = vec![
            WordToken::new("margin", 5.0, 10.0),
            WordToken::new("data", 40.0, 10.0),
        ];
        let table = reconstruct_page(&words, &schema, DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(table.records[0].values, vec!["data", ""]);
    }

    #[test]
    fn test_empty_page_yields_none() {
        assert!(reconstruct_page(&[], &schema3(), DEFAULT_ROW_QUANT).is_none());
    }

    #[test]
    fn test_only_margin_tokens_yield_none() {
        let schema = ColumnSchema::new(vec!["A", "B"], vec![37.5, 85.0]).unwrap();
        let words = vec![WordToken::new("stray", 2.0, 10.0)];
        assert!(reconstruct_page(&words, &schema, DEFAULT_ROW_QUANT).is_none());
    }

    #[test]
    fn test_reconstruction_is_deterministic() {
        let words = vec![
            WordToken::new("x", 1.0, 12.0),
            WordToken::new("y", 11.0, 12.0),
            WordToken::new("z", 21.0, 33.0),
        ];
        let first = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        let second = reconstruct_page(&words, &schema3(), DEFAULT_ROW_QUANT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_narrow_quant_splits_rows() {
        let words = vec![
            WordToken::new("a", 1.0, 100.0),
            WordToken::new("b", 1.0, 104.0),
        ];
        let merged = reconstruct_page(&words, &schema3(), 10.0).unwrap();
        assert_eq!(merged.len(), 1);
        let split = reconstruct_page(&words, &schema3(), 2.0).unwrap();
        assert_eq!(split.len(), 2);
    }
}
