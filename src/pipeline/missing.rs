//! Missing value analysis and column pruning

use polars::prelude::*;

use super::dataset::Dataset;
use crate::error::{CleanError, CleanResult};

/// Default fraction of missing values a column may carry before it is dropped.
pub const DEFAULT_MISSING_THRESHOLD: f64 = 0.2;

/// Analyze missing values per column.
///
/// Returns `(column, missing_count / row_count)` pairs sorted by ratio
/// descending; ties keep column order.
///
/// A zero-row frame has no defined ratio. Every column is reported at 0.0
/// so that empty input never causes spurious drops.
pub fn analyze_missing_values(df: &DataFrame) -> Vec<(String, f64)> {
    let rows = df.height();

    let mut missing_ratios: Vec<(String, f64)> = df
        .get_columns()
        .iter()
        .map(|column| {
            let ratio = if rows == 0 {
                0.0
            } else {
                column.null_count() as f64 / rows as f64
            };
            (column.name().to_string(), ratio)
        })
        .collect();

    missing_ratios.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    missing_ratios
}

/// Get columns whose missing ratio strictly exceeds the threshold
pub fn get_columns_above_threshold(missing_ratios: &[(String, f64)], threshold: f64) -> Vec<String> {
    missing_ratios
        .iter()
        .filter(|(_, ratio)| *ratio > threshold)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Drop every column whose missing ratio is above `threshold`.
///
/// Returns the pruned dataset together with the dropped column names.
///
/// # Errors
/// * `InvalidThreshold` - threshold is NaN or outside `[0, 1]`
pub fn drop_columns_with_many_missing(
    dataset: &Dataset,
    threshold: f64,
) -> CleanResult<(Dataset, Vec<String>)> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CleanError::InvalidThreshold(threshold));
    }

    let missing_ratios = analyze_missing_values(dataset.frame());
    let to_drop = get_columns_above_threshold(&missing_ratios, threshold);

    log::debug!(
        "missing threshold {:.3}: dropping {} of {} columns",
        threshold,
        to_drop.len(),
        dataset.width()
    );

    if to_drop.is_empty() {
        return Ok((dataset.clone(), to_drop));
    }

    let pruned = dataset.frame().drop_many(&to_drop);
    Ok((Dataset::new(pruned), to_drop))
}
