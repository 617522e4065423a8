//! Per-(dataset, grouping-level) pipeline orchestration.
//!
//! Control flow per pair: load capped rows, classify columns, aggregate per
//! group, absorb into the level's global pools. Every failure is contained
//! here: an unreadable file or a missing key column degrades that dataset's
//! contribution to empty and the run continues.

use std::io::{self, Write};

use crate::aggregate::{aggregate, ColumnPools};
use crate::classify::classify_columns;
use crate::config::StatsConfig;
use crate::global::GlobalPools;
use crate::loader::load_csv_capped;
use crate::observe::RunObserver;
use crate::report;
use crate::types::{Dataset, Table};

/// Run the full analysis described by `config`, writing the report to `out`.
///
/// The only errors surfaced are write failures on `out`; dataset-level
/// failures go to the observer and degrade to "no data".
pub fn run(config: &StatsConfig, out: &mut dyn Write, observer: &dyn RunObserver) -> io::Result<()> {
    let identifiers = config.identifier_columns();

    for level in &config.group_levels {
        let label = level.label();
        report::write_level_header(out, &label)?;

        let mut global = GlobalPools::default();
        for source in &config.datasets {
            report::write_dataset_header(out, &source.name, &label)?;

            let dataset = match load_csv_capped(&source.path, config.row_cap) {
                Ok(ds) => {
                    observer.on_dataset_loaded(&source.name, ds.row_count());
                    ds
                }
                Err(err) => {
                    observer.on_warning(&source.name, &err);
                    Dataset::empty()
                }
            };

            let kinds = classify_columns(&dataset, config.sample_rows);
            let pools = match aggregate(&dataset, &source.name, &kinds, &level.keys) {
                Ok(pools) => pools,
                Err(err) => {
                    observer.on_warning(&source.name, &err);
                    ColumnPools::default()
                }
            };

            report::write_column_blocks(out, &pools)?;
            global.absorb(&pools, &identifiers);
        }

        if global.numeric_summary().is_none() && global.categorical_summary().is_none() {
            observer.on_no_data(&format!("global pools ({label})"));
        }
        report::write_global_block(out, &global)?;
    }
    Ok(())
}

/// Run and capture the report as a string. Handy for tests and callers that
/// post-process the output.
pub fn run_to_string(config: &StatsConfig, observer: &dyn RunObserver) -> io::Result<String> {
    let mut buf = Vec::new();
    run(config, &mut buf, observer)?;
    Ok(String::from_utf8(buf).expect("report output is always UTF-8"))
}
