//! Basic summary statistics over flat value sequences.

use std::collections::HashMap;

use crate::types::{CategoricalSummary, NumericSummary};

/// Compute count/mean/min/max/std over a numeric sequence.
///
/// Empty input yields `count == 0` and `None` for every statistic; callers
/// render that as "no data", never as zeros. Standard deviation is the
/// population form; a single value has `std == 0`.
pub fn numeric_summary(values: &[f64]) -> NumericSummary {
    if values.is_empty() {
        return NumericSummary {
            count: 0,
            mean: None,
            min: None,
            max: None,
            std: None,
        };
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let std = if count > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64).sqrt()
    } else {
        0.0
    };

    NumericSummary {
        count,
        mean: Some(mean),
        min: Some(min),
        max: Some(max),
        std: Some(std),
    }
}

/// Compute count/unique/top/freq over a categorical sequence.
///
/// Returns `None` for an empty input. Ties on frequency break to the value
/// that appeared earliest in the sequence, so the result is deterministic
/// regardless of hash order.
pub fn categorical_summary<'a, I>(values: I) -> Option<CategoricalSummary>
where
    I: IntoIterator<Item = &'a str>,
{
    // value -> (occurrences, position of first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut total = 0usize;
    for (pos, v) in values.into_iter().enumerate() {
        total += 1;
        counts
            .entry(v)
            .and_modify(|(n, _)| *n += 1)
            .or_insert((1, pos));
    }
    if total == 0 {
        return None;
    }

    let unique = counts.len();
    let (top, (freq, _)) = counts
        .into_iter()
        .min_by(|(_, (na, fa)), (_, (nb, fb))| nb.cmp(na).then(fa.cmp(fb)))?;

    Some(CategoricalSummary {
        count: total,
        unique,
        top: top.to_owned(),
        freq,
    })
}
