//! Cross-column / cross-dataset pooling.
//!
//! The global pools flatten every non-key column's values, across all
//! columns of a dataset, and across all datasets in a run, so the overall
//! mean is weighted by group size, not a re-average of per-group means.

use std::collections::HashSet;

use crate::aggregate::ColumnPools;
use crate::stats::{categorical_summary, numeric_summary};
use crate::types::{CategoricalSummary, NumericSummary};

/// Flat value pools accumulated over one grouping level of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalPools {
    numeric: Vec<f64>,
    categorical: Vec<String>,
}

impl GlobalPools {
    /// Append every column of `pools` except the columns named in `exclude`
    /// (the designated group-key identifier columns).
    pub fn absorb(&mut self, pools: &ColumnPools, exclude: &HashSet<String>) {
        for (name, vals) in &pools.numeric {
            if !exclude.contains(name) {
                self.numeric.extend_from_slice(vals);
            }
        }
        for (name, vals) in &pools.categorical {
            if !exclude.contains(name) {
                self.categorical.extend(vals.iter().cloned());
            }
        }
    }

    /// Overall numeric summary, `None` when the pool is empty.
    pub fn numeric_summary(&self) -> Option<NumericSummary> {
        if self.numeric.is_empty() {
            None
        } else {
            Some(numeric_summary(&self.numeric))
        }
    }

    /// Overall categorical summary, `None` when the pool is empty.
    pub fn categorical_summary(&self) -> Option<CategoricalSummary> {
        categorical_summary(self.categorical.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pools(numeric: &[(&str, &[f64])], categorical: &[(&str, &[&str])]) -> ColumnPools {
        ColumnPools {
            numeric: numeric
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_vec()))
                .collect(),
            categorical: categorical
                .iter()
                .map(|(n, v)| (n.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    #[test]
    fn absorb_pools_raw_values_not_group_means() {
        // Two "groups" of very different sizes. The pooled mean must weight
        // each value equally, not average the two per-column means.
        let mut global = GlobalPools::default();
        global.absorb(
            &pools(&[("a", &[1.0, 1.0, 1.0, 1.0]), ("b", &[9.0])], &[]),
            &HashSet::new(),
        );

        let s = global.numeric_summary().unwrap();
        assert_eq!(s.count, 5);
        // Pooled: (4*1 + 9) / 5 = 2.6. Naive mean-of-means would be 5.0.
        assert_eq!(s.mean, Some(2.6));
    }

    #[test]
    fn absorb_excludes_identifier_columns() {
        let mut global = GlobalPools::default();
        let exclude: HashSet<String> =
            ["page_id".to_string(), "ad_id".to_string()].into_iter().collect();
        global.absorb(
            &pools(
                &[("spend", &[5.0])],
                &[("page_id", &["p1", "p2"]), ("region", &["us"])],
            ),
            &exclude,
        );

        assert_eq!(global.numeric_summary().unwrap().count, 1);
        let cat = global.categorical_summary().unwrap();
        assert_eq!(cat.count, 1);
        assert_eq!(cat.top, "us");
    }

    #[test]
    fn empty_pools_report_no_data() {
        let global = GlobalPools::default();
        assert_eq!(global.numeric_summary(), None);
        assert_eq!(global.categorical_summary(), None);
    }

    #[test]
    fn absorb_accumulates_across_datasets() {
        let mut global = GlobalPools::default();
        let none = HashSet::new();
        global.absorb(&pools(&[("x", &[1.0])], &[("c", &["a"])]), &none);
        global.absorb(&pools(&[("y", &[3.0])], &[("d", &["a", "b"])]), &none);

        assert_eq!(global.numeric_summary().unwrap().mean, Some(2.0));
        let cat = global.categorical_summary().unwrap();
        assert_eq!(cat.count, 3);
        assert_eq!(cat.top, "a");
        assert_eq!(cat.freq, 2);
    }
}
