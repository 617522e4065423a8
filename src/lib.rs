//! `descriptive-stats` computes descriptive statistics over delimited
//! tabular files: count/mean/min/max/std for numeric columns and
//! count/unique/top/freq for categorical columns, at three aggregation
//! levels (ungrouped, grouped by one key column, grouped by a composite
//! key), plus a pooled cross-dataset global summary per level.
//!
//! The pipeline per (dataset, grouping level) is:
//!
//! 1. [`loader`]: read up to a fixed row cap from a headered CSV file
//! 2. [`classify`]: type-sniff each column as Numeric or Categorical from a
//!    100-row sample (80% parse threshold)
//! 3. [`aggregate`]: partition by the level's key columns and pool values
//!    (means per group for numeric columns, raw strings for categorical)
//! 4. [`global`]: pool all non-key values across columns and datasets into
//!    one overall summary pair
//!
//! Failures are contained at the (dataset, level) boundary: an unreadable
//! file or a missing key column is reported through [`observe::RunObserver`]
//! and that scope degrades to "no data"; nothing is fatal to the run.
//!
//! ## Quick example
//!
//! ```no_run
//! use descriptive_stats::config::{DatasetSource, GroupLevel, StatsConfig};
//! use descriptive_stats::observe::StdErrObserver;
//! use descriptive_stats::runner::run;
//!
//! # fn main() -> std::io::Result<()> {
//! let config = StatsConfig {
//!     datasets: vec![DatasetSource::new("ads", "data/main_ads.csv")],
//!     group_levels: vec![
//!         GroupLevel::ungrouped(),
//!         GroupLevel::by(&["page_id"]),
//!         GroupLevel::by(&["page_id", "ad_id"]),
//!     ],
//!     ..Default::default()
//! };
//!
//! let mut out = std::io::stdout().lock();
//! run(&config, &mut out, &StdErrObserver)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Table`] trait, in-memory [`types::Dataset`],
//!   and summary structs
//! - [`loader`]: capped CSV row loading
//! - [`classify`]: Numeric/Categorical column sniffing
//! - [`stats`]: basic summary computation over flat sequences
//! - [`aggregate`]: per-group pooling
//! - [`global`]: cross-column / cross-dataset pooling
//! - [`report`]: textual rendering
//! - [`config`] / [`runner`] / [`observe`]: run wiring
//! - [`error`]: shared error types

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod global;
pub mod loader;
pub mod observe;
pub mod report;
pub mod runner;
pub mod stats;
pub mod types;

pub use error::{StatsError, StatsResult};
