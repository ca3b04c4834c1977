use crate::extraction::CandidateGrid;

/// Minimum consecutive multi-cell lines before a block counts as a table.
const MIN_TABLE_ROWS: usize = 2;

/// Cells are separated by runs of at least this many spaces in `-layout`
/// output; single spaces stay inside a cell.
const CELL_GAP: usize = 2;

/// Stream-based table detection over whitespace-aligned page text.
///
/// A candidate is a block of consecutive lines that each split into two or
/// more cells on wide space runs. Ragged blocks are padded to the widest
/// line so every candidate is rectangular; the caller decides which column
/// counts it will accept.
pub fn detect_tables(lines: &[String]) -> Vec<CandidateGrid> {
    let mut candidates = Vec::new();
    let mut block: Vec<Vec<String>> = Vec::new();

    for line in lines {
        let cells = split_cells(line);
        if cells.len() >= 2 {
            block.push(cells);
        } else {
            flush_block(&mut block, &mut candidates);
        }
    }
    flush_block(&mut block, &mut candidates);

    candidates
}

fn flush_block(block: &mut Vec<Vec<String>>, candidates: &mut Vec<CandidateGrid>) {
    if block.len() >= MIN_TABLE_ROWS {
        let width = block.iter().map(Vec::len).max().unwrap_or(0);
        let grid = block
            .drain(..)
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        candidates.push(grid);
    } else {
        block.clear();
    }
}

/// Split one layout line into cells on runs of `CELL_GAP`+ spaces.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;

    for ch in line.trim().chars() {
        if ch == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= CELL_GAP && !current.is_empty() {
            cells.push(std::mem::take(&mut current));
        } else if spaces > 0 && !current.is_empty() {
            current.push(' ');
        }
        spaces = 0;
        current.push(ch);
    }
    if !current.is_empty() {
        cells.push(current);
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_cells_on_wide_gaps() {
        assert_eq!(
            split_cells("  QA12XY34   2024-03-01 10:15   Sent to Alice"),
            vec!["QA12XY34", "2024-03-01 10:15", "Sent to Alice"]
        );
    }

    #[test]
    fn test_split_cells_keeps_single_spaces() {
        assert_eq!(split_cells("Paid In"), vec!["Paid In"]);
    }

    #[test]
    fn test_detects_aligned_block() {
        let page = lines(&[
            "MPESA STATEMENT",
            "",
            "  Receipt No.   Completion Time    Details",
            "  QA12XY34      2024-03-01 10:15   Sent to Alice",
            "  QA12XY35      2024-03-01 11:40   Airtime purchase",
            "",
            "Page 1 of 3",
        ]);
        let tables = detect_tables(&page);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 3);
        assert_eq!(tables[0][1][0], "QA12XY34");
    }

    #[test]
    fn test_single_multi_cell_line_is_not_a_table() {
        let page = lines(&["Title", "  left    right", "prose prose prose"]);
        assert!(detect_tables(&page).is_empty());
    }

    #[test]
    fn test_ragged_block_padded_to_widest_row() {
        let page = lines(&[
            "  a   b   c",
            "  d   e",
        ]);
        let tables = detect_tables(&page);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0][0], vec!["a", "b", "c"]);
        assert_eq!(tables[0][1], vec!["d", "e", ""]);
    }

    #[test]
    fn test_blank_lines_separate_blocks() {
        let page = lines(&[
            "  a   b",
            "  c   d",
            "",
            "  e   f",
            "  g   h",
        ]);
        assert_eq!(detect_tables(&page).len(), 2);
    }
}
