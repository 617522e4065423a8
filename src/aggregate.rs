//! Per-group aggregation.
//!
//! Rows are partitioned by zero, one, or two key columns. Within each
//! partition, numeric columns are mean-reduced (one mean per group) while
//! categorical columns are pooled as-is across groups. With no keys, the
//! output degenerates to each column's raw values.

use std::collections::{BTreeMap, HashMap};

use crate::classify::parse_finite;
use crate::error::{StatsError, StatsResult};
use crate::stats::{categorical_summary, numeric_summary};
use crate::types::{CategoricalSummary, ColumnKind, NumericSummary, Table};

/// Per-column value pools produced by one (dataset, grouping-level) pass.
///
/// Columns appear in table order. A column whose pool ended up empty keeps
/// its entry; the report layer skips it and the global aggregator ignores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnPools {
    /// Numeric column -> per-group means (grouped) or raw values (ungrouped).
    pub numeric: Vec<(String, Vec<f64>)>,
    /// Categorical column -> pooled non-blank values, group-by-group.
    pub categorical: Vec<(String, Vec<String>)>,
}

impl ColumnPools {
    /// Summaries for each numeric column that has at least one value.
    pub fn numeric_summaries(&self) -> Vec<(&str, NumericSummary)> {
        self.numeric
            .iter()
            .filter(|(_, vals)| !vals.is_empty())
            .map(|(name, vals)| (name.as_str(), numeric_summary(vals)))
            .collect()
    }

    /// Summaries for each categorical column that has at least one value.
    pub fn categorical_summaries(&self) -> Vec<(&str, CategoricalSummary)> {
        self.categorical
            .iter()
            .filter_map(|(name, vals)| {
                categorical_summary(vals.iter().map(String::as_str))
                    .map(|s| (name.as_str(), s))
            })
            .collect()
    }
}

/// Partition `table` by `keys` and pool per-column values.
///
/// - `keys` empty: numeric pools hold raw parsed values, categorical pools
///   hold raw non-blank strings, in row order.
/// - `keys` non-empty: rows with a blank value in any key column are
///   excluded; numeric pools hold one mean per group with at least one
///   parseable value; categorical pools concatenate group contents in
///   first-encountered group order, preserving row order within a group.
///
/// A key column absent from the table yields
/// [`StatsError::MissingKeyColumn`] with no partial output.
pub fn aggregate<T: Table>(
    table: &T,
    dataset: &str,
    kinds: &BTreeMap<String, ColumnKind>,
    keys: &[String],
) -> StatsResult<ColumnPools> {
    let mut key_idxs = Vec::with_capacity(keys.len());
    for key in keys {
        match table.column_index(key) {
            Some(idx) => key_idxs.push(idx),
            None => {
                return Err(StatsError::MissingKeyColumn {
                    dataset: dataset.to_owned(),
                    column: key.clone(),
                });
            }
        }
    }

    // (column index, name) split by kind, preserving table column order.
    let mut numeric_cols: Vec<(usize, &str)> = Vec::new();
    let mut categorical_cols: Vec<(usize, &str)> = Vec::new();
    for (idx, name) in table.columns().iter().enumerate() {
        match kinds.get(name) {
            Some(ColumnKind::Numeric) => numeric_cols.push((idx, name)),
            _ => categorical_cols.push((idx, name)),
        }
    }

    if key_idxs.is_empty() {
        return Ok(pool_ungrouped(table, &numeric_cols, &categorical_cols));
    }

    // Partitions in first-encountered key order; each holds row indices.
    let mut partition_of: HashMap<Vec<String>, usize> = HashMap::new();
    let mut partitions: Vec<Vec<usize>> = Vec::new();
    'rows: for row in 0..table.row_count() {
        let mut key = Vec::with_capacity(key_idxs.len());
        for &k in &key_idxs {
            match table.cell(row, k) {
                Some(v) => key.push(v.to_owned()),
                None => continue 'rows,
            }
        }
        let slot = *partition_of.entry(key).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[slot].push(row);
    }

    let mut pools = ColumnPools::default();
    for (idx, name) in &numeric_cols {
        let mut means = Vec::new();
        for rows in &partitions {
            let vals: Vec<f64> = rows
                .iter()
                .filter_map(|&r| table.cell(r, *idx).and_then(parse_finite))
                .collect();
            if !vals.is_empty() {
                means.push(vals.iter().sum::<f64>() / vals.len() as f64);
            }
        }
        pools.numeric.push((name.to_string(), means));
    }
    for (idx, name) in &categorical_cols {
        let mut pooled = Vec::new();
        for rows in &partitions {
            for &r in rows {
                if let Some(v) = table.cell(r, *idx) {
                    pooled.push(v.to_owned());
                }
            }
        }
        pools.categorical.push((name.to_string(), pooled));
    }
    Ok(pools)
}

fn pool_ungrouped<T: Table>(
    table: &T,
    numeric_cols: &[(usize, &str)],
    categorical_cols: &[(usize, &str)],
) -> ColumnPools {
    let mut pools = ColumnPools::default();
    for (idx, name) in numeric_cols {
        let vals: Vec<f64> = (0..table.row_count())
            .filter_map(|r| table.cell(r, *idx).and_then(parse_finite))
            .collect();
        pools.numeric.push((name.to_string(), vals));
    }
    for (idx, name) in categorical_cols {
        let vals: Vec<String> = (0..table.row_count())
            .filter_map(|r| table.cell(r, *idx).map(str::to_owned))
            .collect();
        pools.categorical.push((name.to_string(), vals));
    }
    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_columns;
    use crate::types::Dataset;

    fn sales_table() -> Dataset {
        let columns = ["store", "item", "price", "label"]
            .map(String::from)
            .to_vec();
        let rows = [
            ["s1", "i1", "10.0", "red"],
            ["s1", "i1", "20.0", "blue"],
            ["s1", "i2", "30.0", "red"],
            ["s2", "i1", "40.0", ""],
            ["s2", "", "99.0", "green"],
        ]
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect();
        Dataset::new(columns, rows)
    }

    fn kinds_for(ds: &Dataset) -> BTreeMap<String, ColumnKind> {
        classify_columns(ds, 100)
    }

    #[test]
    fn ungrouped_pools_raw_values() {
        let ds = sales_table();
        let pools = aggregate(&ds, "sales", &kinds_for(&ds), &[]).unwrap();

        let (name, price) = pools
            .numeric
            .iter()
            .find(|(n, _)| n == "price")
            .map(|(n, v)| (n.clone(), v.clone()))
            .unwrap();
        assert_eq!(name, "price");
        assert_eq!(price, vec![10.0, 20.0, 30.0, 40.0, 99.0]);

        let (_, labels) = pools
            .categorical
            .iter()
            .find(|(n, _)| n == "label")
            .unwrap();
        assert_eq!(labels, &["red", "blue", "red", "green"]);
    }

    #[test]
    fn single_key_grouping_mean_reduces_numeric() {
        let ds = sales_table();
        let pools = aggregate(&ds, "sales", &kinds_for(&ds), &["store".to_string()]).unwrap();

        let (_, price) = pools.numeric.iter().find(|(n, _)| n == "price").unwrap();
        // s1 -> mean(10, 20, 30) = 20; s2 -> mean(40, 99) = 69.5
        assert_eq!(price, &[20.0, 69.5]);
    }

    #[test]
    fn composite_key_excludes_rows_with_blank_key() {
        let ds = sales_table();
        let keys = ["store", "item"].map(String::from).to_vec();
        let pools = aggregate(&ds, "sales", &kinds_for(&ds), &keys).unwrap();

        let (_, price) = pools.numeric.iter().find(|(n, _)| n == "price").unwrap();
        // (s1,i1) -> 15; (s1,i2) -> 30; (s2,i1) -> 40; blank-item row dropped.
        assert_eq!(price, &[15.0, 30.0, 40.0]);

        let (_, labels) = pools
            .categorical
            .iter()
            .find(|(n, _)| n == "label")
            .unwrap();
        assert_eq!(labels, &["red", "blue", "red"]);
    }

    #[test]
    fn categorical_pool_keeps_group_then_row_order() {
        let columns = vec!["k".to_string(), "v".to_string()];
        let rows = [["b", "x"], ["a", "y"], ["b", "z"], ["a", "w"]]
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        let ds = Dataset::new(columns, rows);
        let pools = aggregate(&ds, "t", &kinds_for(&ds), &["k".to_string()]).unwrap();

        let (_, vals) = pools.categorical.iter().find(|(n, _)| n == "v").unwrap();
        // Group "b" encountered first: its rows, then group "a"'s rows.
        assert_eq!(vals, &["x", "z", "y", "w"]);
    }

    #[test]
    fn missing_key_column_is_err() {
        let ds = sales_table();
        let err = aggregate(&ds, "sales", &kinds_for(&ds), &["nope".to_string()]).unwrap_err();
        match err {
            StatsError::MissingKeyColumn { dataset, column } => {
                assert_eq!(dataset, "sales");
                assert_eq!(column, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_group_means_yield_no_entry_value() {
        let columns = vec!["k".to_string(), "n".to_string()];
        let rows = [["a", "1"], ["b", ""]]
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        let ds = Dataset::new(columns, rows);
        let pools = aggregate(&ds, "t", &kinds_for(&ds), &["k".to_string()]).unwrap();

        let (_, means) = pools.numeric.iter().find(|(n, _)| n == "n").unwrap();
        // Group "b" has no parseable value for n; only group "a" contributes.
        assert_eq!(means, &[1.0]);
    }

    #[test]
    fn summaries_skip_empty_columns() {
        let columns = vec!["n".to_string(), "c".to_string()];
        let ds = Dataset::new(columns, vec![vec!["".to_string(), "".to_string()]]);
        let mut kinds = BTreeMap::new();
        kinds.insert("n".to_string(), ColumnKind::Numeric);
        kinds.insert("c".to_string(), ColumnKind::Categorical);

        let pools = aggregate(&ds, "t", &kinds, &[]).unwrap();
        assert!(pools.numeric_summaries().is_empty());
        assert!(pools.categorical_summaries().is_empty());
    }
}
