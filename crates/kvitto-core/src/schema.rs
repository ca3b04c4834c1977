use serde::{Deserialize, Serialize};

use crate::error::KvittoError;

/// Ordered column names paired with the x offset where each column begins.
///
/// The last column's region extends to the right edge of the page. Boundaries
/// must strictly increase and there must be exactly one per column name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    names: Vec<String>,
    boundaries: Vec<f32>,
}

impl ColumnSchema {
    pub fn new<S: Into<String>>(
        names: Vec<S>,
        boundaries: Vec<f32>,
    ) -> Result<ColumnSchema, KvittoError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(KvittoError::InvalidSchema("no columns defined".into()));
        }
        if names.len() != boundaries.len() {
            return Err(KvittoError::InvalidSchema(format!(
                "{} column names but {} boundaries",
                names.len(),
                boundaries.len()
            )));
        }
        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(KvittoError::InvalidSchema(
                "boundaries must strictly increase".into(),
            ));
        }

        Ok(ColumnSchema { names, boundaries })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn first_name(&self) -> &str {
        &self.names[0]
    }

    pub fn last_name(&self) -> &str {
        &self.names[self.names.len() - 1]
    }

    /// Which column owns a word starting at `x0`.
    ///
    /// Column i covers [boundaries[i], boundaries[i+1]); the last column is
    /// open-ended to the right. Anything left of the first boundary belongs
    /// to no column (stray margin artifacts).
    pub fn column_for(&self, x0: f32) -> Option<usize> {
        for (i, &start) in self.boundaries.iter().enumerate() {
            let end = self.boundaries.get(i + 1);
            if x0 >= start && end.map_or(true, |&e| x0 < e) {
                return Some(i);
            }
        }
        None
    }
}

/// The fixed M-Pesa statement layout: seven columns at known x offsets.
///
/// Offsets were measured from one statement layout and are not
/// auto-calibrated.
pub fn statement_schema() -> ColumnSchema {
    ColumnSchema::new(
        vec![
            "Receipt No.",
            "Completion Time",
            "Details",
            "Transaction Status",
            "Paid In",
            "Withdrawn",
            "Balance",
        ],
        vec![37.5, 85.0, 194.899, 350.0, 418.4, 465.2, 521.34],
    )
    .expect("statement schema constants are valid")
}
