//! Textual report rendering.
//!
//! Labels and precision here are presentation only; the statistic values and
//! selection rules come from the aggregation layers.

use std::io::{self, Write};

use crate::aggregate::ColumnPools;
use crate::global::GlobalPools;
use crate::types::{CategoricalSummary, NumericSummary};

/// Header for one grouping level of the run.
pub fn write_level_header(out: &mut dyn Write, label: &str) -> io::Result<()> {
    writeln!(out, "\n====================== ANALYSIS: {label} ======================")
}

/// Header for one (dataset, level) block.
pub fn write_dataset_header(out: &mut dyn Write, dataset: &str, label: &str) -> io::Result<()> {
    writeln!(out, "\n==== File: {dataset} | {label} ====")
}

/// Numeric + categorical per-column blocks for one dataset.
pub fn write_column_blocks(out: &mut dyn Write, pools: &ColumnPools) -> io::Result<()> {
    writeln!(out, "-- Numeric Stats Per Column --")?;
    let numeric = pools.numeric_summaries();
    if numeric.is_empty() {
        writeln!(out, "  (no numeric data)")?;
    }
    for (name, s) in numeric {
        write_numeric_line(out, name, &s)?;
    }

    writeln!(out, "-- Categorical Stats Per Column --")?;
    let categorical = pools.categorical_summaries();
    if categorical.is_empty() {
        writeln!(out, "  (no categorical data)")?;
    }
    for (name, s) in categorical {
        write_categorical_line(out, name, &s)?;
    }
    Ok(())
}

/// Cross-dataset global block for one grouping level.
pub fn write_global_block(out: &mut dyn Write, global: &GlobalPools) -> io::Result<()> {
    writeln!(out, "\n==== Overall Global Stats (All Files Combined) ====")?;
    match global.numeric_summary() {
        Some(s) => {
            writeln!(out, "Overall Numeric:")?;
            write_numeric_line(out, "all values", &s)?;
        }
        None => writeln!(out, "Overall Numeric: no data")?,
    }
    match global.categorical_summary() {
        Some(s) => {
            writeln!(out, "Overall Categorical:")?;
            write_categorical_line(out, "all values", &s)?;
        }
        None => writeln!(out, "Overall Categorical: no data")?,
    }
    Ok(())
}

fn write_numeric_line(out: &mut dyn Write, name: &str, s: &NumericSummary) -> io::Result<()> {
    match (s.mean, s.min, s.max, s.std) {
        (Some(mean), Some(min), Some(max), Some(std)) => writeln!(
            out,
            "  {name} -> count: {}, mean: {mean:.4}, min: {min}, max: {max}, std: {std:.4}",
            s.count
        ),
        _ => writeln!(out, "  {name} -> no data"),
    }
}

fn write_categorical_line(
    out: &mut dyn Write,
    name: &str,
    s: &CategoricalSummary,
) -> io::Result<()> {
    writeln!(
        out,
        "  {name} -> count: {}, unique: {}, top: {}, freq: {}",
        s.count, s.unique, s.top, s.freq
    )
}
