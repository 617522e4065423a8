//! CSV row loading with a hard row cap.
//!
//! The cap is applied while reading, so a file larger than the cap never
//! fully enters memory and only its first `cap` rows (in file order) can
//! contribute to any downstream statistic.

use std::path::Path;

use crate::error::StatsResult;
use crate::types::Dataset;

/// Load at most `cap` data rows from a headered CSV file.
///
/// Column names come from the header row; cell values are stored raw (blank
/// cells stay empty strings). Read failures surface as `Err`; callers that
/// want the warn-and-continue behavior contain it (see the runner).
pub fn load_csv_capped(path: impl AsRef<Path>, cap: usize) -> StatsResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    load_csv_capped_from_reader(&mut rdr, cap)
}

/// Load capped rows from an existing CSV reader.
pub fn load_csv_capped_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    cap: usize,
) -> StatsResult<Dataset> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records().take(cap) {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Dataset::new(columns, rows))
}
