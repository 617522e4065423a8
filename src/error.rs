use thiserror::Error;

/// Convenience result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Error type shared across loading, grouping, and reporting.
///
/// Every variant is recoverable at the (dataset, grouping-level) boundary:
/// the runner reports it as a warning and treats the affected scope as empty.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A requested grouping key does not exist among the dataset's columns.
    #[error("dataset '{dataset}' has no column '{column}' to group by")]
    MissingKeyColumn { dataset: String, column: String },
}
