//! Run configuration.
//!
//! The configuration is an explicit structure built in code: row cap and
//! dataset paths are constants of a deployment, not dynamic flags.

use std::collections::HashSet;
use std::path::PathBuf;

/// Default maximum number of data rows read per dataset.
pub const DEFAULT_ROW_CAP: usize = 500;

/// One named input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    /// Display name used in report headers and warnings.
    pub name: String,
    /// Path to the delimited file.
    pub path: PathBuf,
}

impl DatasetSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One grouping level: zero, one, or two key column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLevel {
    pub keys: Vec<String>,
}

impl GroupLevel {
    /// The ungrouped level.
    pub fn ungrouped() -> Self {
        Self { keys: Vec::new() }
    }

    /// A level grouped by the given key columns.
    pub fn by(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Header label: "ungrouped" or "grouped by a, b".
    pub fn label(&self) -> String {
        if self.keys.is_empty() {
            "ungrouped".to_string()
        } else {
            format!("grouped by {}", self.keys.join(", "))
        }
    }
}

/// Full configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Maximum rows read per dataset, applied before any classification or
    /// aggregation.
    pub row_cap: usize,
    /// Rows sampled when classifying column types.
    pub sample_rows: usize,
    /// Named input files, processed in order.
    pub datasets: Vec<DatasetSource>,
    /// Grouping levels to compute, in order.
    pub group_levels: Vec<GroupLevel>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            row_cap: DEFAULT_ROW_CAP,
            sample_rows: crate::classify::DEFAULT_SAMPLE_ROWS,
            datasets: Vec::new(),
            group_levels: vec![GroupLevel::ungrouped()],
        }
    }
}

impl StatsConfig {
    /// Union of all key columns across the configured grouping levels.
    ///
    /// These are the identifier columns excluded from global pooling.
    pub fn identifier_columns(&self) -> HashSet<String> {
        self.group_levels
            .iter()
            .flat_map(|level| level.keys.iter().cloned())
            .collect()
    }
}
