use serde::{Deserialize, Serialize};

/// One finalized statement row: cell values in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Record {
        Record { values }
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.trim().is_empty())
    }
}

/// An ordered sequence of records sharing one set of column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn empty(columns: &[String]) -> Table {
        Table {
            columns: columns.to_vec(),
            records: Vec::new(),
        }
    }

    /// Build a table from raw rows, padding or truncating each row to the
    /// column count.
    pub fn from_rows(columns: &[String], rows: Vec<Vec<String>>) -> Table {
        let width = columns.len();
        let records = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                Record::new(row)
            })
            .collect();
        Table {
            columns: columns.to_vec(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Concatenate tables in order, keeping the given column names.
    pub fn concat(columns: &[String], tables: Vec<Table>) -> Table {
        let mut out = Table::empty(columns);
        for table in tables {
            out.records.extend(table.records);
        }
        out
    }

    /// A copy containing only records with a non-empty value in `column`.
    /// Unknown column names yield an empty table.
    pub fn filter_non_empty(&self, column: &str) -> Table {
        let mut out = Table::empty(&self.columns);
        if let Some(idx) = self.column_index(column) {
            out.records = self
                .records
                .iter()
                .filter(|r| r.values.get(idx).is_some_and(|v| !v.trim().is_empty()))
                .cloned()
                .collect();
        }
        out
    }
}
