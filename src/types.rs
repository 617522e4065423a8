//! Core data model types.
//!
//! The classifier and aggregator operate against the [`Table`] trait rather
//! than a concrete storage type, so the in-memory [`Dataset`] engine can be
//! swapped without touching the statistics logic.

use serde::{Deserialize, Serialize};

/// Read-only view over a tabular dataset of raw string cells.
///
/// Blank cells are reported as `None`; implementations must keep row and
/// column order stable across calls, since grouping and tie-breaking both
/// depend on first-encountered order.
pub trait Table {
    /// Column names, in file order.
    fn columns(&self) -> &[String];

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Cell at (`row`, `col`), `None` when the cell is absent or blank.
    fn cell(&self, row: usize, col: usize) -> Option<&str>;

    /// Index of a column by name, if present.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns().iter().position(|c| c == name)
    }
}

/// In-memory row-major dataset of raw string values.
///
/// Cells hold the values exactly as read; an empty string is a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    ///
    /// Short rows are tolerated; missing trailing cells read as blank.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// A dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Table for Dataset {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let raw = self.rows.get(row)?.get(col)?.trim();
        if raw.is_empty() { None } else { Some(raw) }
    }
}

/// Classification of a column, decided once per dataset from a row sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// At least 80% of non-blank sampled values parse as finite floats.
    Numeric,
    /// Everything else, including columns with no non-blank samples.
    Categorical,
}

/// Summary statistics for a sequence of numeric values.
///
/// An empty input yields `count == 0` with every other field `None`, which
/// the report layer renders as "no data" rather than zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Population standard deviation; `Some(0.0)` for a single value.
    pub std: Option<f64>,
}

/// Summary statistics for a sequence of categorical (string) values.
///
/// `top` is the most frequent value; ties break to whichever tied value was
/// encountered first in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub top: String,
    pub freq: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_cell_blanks_and_short_rows() {
        let ds = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["1".to_string(), "  ".to_string()],
                vec!["2".to_string()],
            ],
        );
        assert_eq!(ds.cell(0, 0), Some("1"));
        assert_eq!(ds.cell(0, 1), None);
        assert_eq!(ds.cell(1, 1), None);
        assert_eq!(ds.cell(9, 0), None);
    }

    #[test]
    fn dataset_cell_trims_whitespace() {
        let ds = Dataset::new(
            vec!["a".to_string()],
            vec![vec!["  hello  ".to_string()]],
        );
        assert_eq!(ds.cell(0, 0), Some("hello"));
    }

    #[test]
    fn column_index_by_name() {
        let ds = Dataset::new(vec!["x".to_string(), "y".to_string()], vec![]);
        assert_eq!(ds.column_index("y"), Some(1));
        assert_eq!(ds.column_index("z"), None);
    }

    #[test]
    fn summaries_round_trip_through_json() {
        let s = NumericSummary {
            count: 2,
            mean: Some(1.5),
            min: Some(1.0),
            max: Some(2.0),
            std: Some(0.5),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: NumericSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        let c = CategoricalSummary {
            count: 3,
            unique: 2,
            top: "a".to_string(),
            freq: 2,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"top\":\"a\""));
    }
}
