use std::fmt;
use std::sync::Arc;

use crate::error::StatsError;

/// Observer interface for run-level events.
///
/// The runner never fails the overall run; it reports contained failures and
/// empty scopes here instead. Implementors can log, count, or alert.
pub trait RunObserver: Send + Sync {
    /// A dataset was loaded (post-cap row count).
    fn on_dataset_loaded(&self, _dataset: &str, _rows: usize) {}

    /// A contained failure: the named dataset's contribution at the current
    /// grouping level degrades to empty.
    fn on_warning(&self, _dataset: &str, _error: &StatsError) {}

    /// A scope (column block or global pool) had no eligible values.
    fn on_no_data(&self, _scope: &str) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RunObserver for CompositeObserver {
    fn on_dataset_loaded(&self, dataset: &str, rows: usize) {
        for o in &self.observers {
            o.on_dataset_loaded(dataset, rows);
        }
    }

    fn on_warning(&self, dataset: &str, error: &StatsError) {
        for o in &self.observers {
            o.on_warning(dataset, error);
        }
    }

    fn on_no_data(&self, scope: &str) {
        for o in &self.observers {
            o.on_no_data(scope);
        }
    }
}

/// Logs run events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RunObserver for StdErrObserver {
    fn on_dataset_loaded(&self, dataset: &str, rows: usize) {
        eprintln!("[stats][ok] dataset={dataset} rows={rows}");
    }

    fn on_warning(&self, dataset: &str, error: &StatsError) {
        eprintln!("[stats][warn] dataset={dataset} err={error}");
    }

    fn on_no_data(&self, scope: &str) {
        eprintln!("[stats][info] no data for {scope}");
    }
}

/// An observer that ignores every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl RunObserver for NullObserver {}
