//! Column type sniffing.
//!
//! A column is Numeric when at least 80% of its non-blank values in a sample
//! of up to [`DEFAULT_SAMPLE_ROWS`] rows parse as finite floats; everything
//! else is Categorical. The threshold and sample size are load-bearing:
//! changing either changes which columns are treated as numeric.

use std::collections::BTreeMap;

use crate::types::{ColumnKind, Table};

/// Default number of rows inspected when classifying columns.
pub const DEFAULT_SAMPLE_ROWS: usize = 100;

/// Fraction of non-blank sampled values that must parse numerically.
const NUMERIC_THRESHOLD: f64 = 0.8;

/// Parse a full trimmed string as a finite float.
///
/// Partial parses are rejected, and so are `inf`/`NaN` spellings that Rust's
/// float parser would otherwise accept.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classify every column of `table` from a sample of up to `sample_rows` rows.
///
/// A column with zero non-blank sampled values is Categorical (no numeric
/// evidence). The returned mapping is applied to all rows of the dataset,
/// including rows outside the sample.
pub fn classify_columns<T: Table>(table: &T, sample_rows: usize) -> BTreeMap<String, ColumnKind> {
    let sampled = table.row_count().min(sample_rows);

    let mut kinds = BTreeMap::new();
    for (col_idx, name) in table.columns().iter().enumerate() {
        let mut non_blank = 0usize;
        let mut numeric = 0usize;
        for row in 0..sampled {
            if let Some(raw) = table.cell(row, col_idx) {
                non_blank += 1;
                if parse_finite(raw).is_some() {
                    numeric += 1;
                }
            }
        }

        let kind = if non_blank > 0 && numeric as f64 >= NUMERIC_THRESHOLD * non_blank as f64 {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        };
        kinds.insert(name.clone(), kind);
    }
    kinds
}
