//! IQR-based outlier detection and removal
//!
//! A value is an outlier when it lies strictly outside
//! `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`, with quartiles computed by linear
//! interpolation over the non-missing values of the column.
//!
//! Removal over several columns is order dependent when run with
//! [`OutlierPass::Sequential`]: each column's quartiles are computed on the
//! rows that survived the previous columns.

use std::collections::BTreeSet;

use polars::prelude::*;
use serde::Serialize;

use super::dataset::Dataset;
use crate::error::CleanResult;

/// Multiplier applied to the IQR to place the fences.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Quartiles and fences computed for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        }
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// How flags from several columns are combined during removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierPass {
    /// Detect on the table as it stands after earlier columns were cleaned.
    #[default]
    Sequential,
    /// Detect every column on the input table, then remove the union.
    AgainstOriginal,
}

/// Number of rows flagged in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnOutliers {
    pub column: String,
    pub flagged: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<OutlierBounds>,
}

/// Compute Q1/Q3 and the IQR fences of a numeric column.
///
/// Returns `None` when the column has no non-missing values.
pub fn outlier_bounds(dataset: &Dataset, column: &str) -> CleanResult<Option<OutlierBounds>> {
    let values = dataset.numeric_values(column)?;
    bounds_of(&values)
}

fn bounds_of(values: &Float64Chunked) -> CleanResult<Option<OutlierBounds>> {
    let q1 = values.quantile(0.25, QuantileMethod::Linear)?;
    let q3 = values.quantile(0.75, QuantileMethod::Linear)?;
    Ok(match (q1, q3) {
        (Some(q1), Some(q3)) => Some(OutlierBounds::from_quartiles(q1, q3)),
        _ => None,
    })
}

/// Row indices whose value in `column` lies outside the IQR fences.
///
/// Missing values are never flagged. The dataset is not modified.
///
/// # Errors
/// * `ColumnNotFound` - the column is absent
/// * `TypeMismatch` - the column is categorical
pub fn detect_outliers(dataset: &Dataset, column: &str) -> CleanResult<Vec<usize>> {
    let values = dataset.numeric_values(column)?;
    let Some(bounds) = bounds_of(&values)? else {
        return Ok(Vec::new());
    };

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, v)| match v {
            Some(v) if bounds.is_outlier(v) => Some(idx),
            _ => None,
        })
        .collect())
}

/// Remove rows flagged as outliers in any of `columns`.
///
/// With [`OutlierPass::Sequential`] the result depends on the order of
/// `columns`. Surviving rows keep their relative order.
pub fn remove_outliers(
    dataset: &Dataset,
    columns: &[&str],
    pass: OutlierPass,
) -> CleanResult<(Dataset, Vec<ColumnOutliers>)> {
    match pass {
        OutlierPass::Sequential => remove_sequential(dataset, columns),
        OutlierPass::AgainstOriginal => remove_against_original(dataset, columns),
    }
}

fn remove_sequential(
    dataset: &Dataset,
    columns: &[&str],
) -> CleanResult<(Dataset, Vec<ColumnOutliers>)> {
    let mut current = dataset.clone();
    let mut report = Vec::with_capacity(columns.len());

    for &column in columns {
        let bounds = outlier_bounds(&current, column)?;
        let flagged: BTreeSet<usize> = detect_outliers(&current, column)?.into_iter().collect();
        log::debug!("'{}': {} outlier(s) of {} rows", column, flagged.len(), current.height());

        report.push(ColumnOutliers {
            column: column.to_string(),
            flagged: flagged.len(),
            bounds,
        });

        if !flagged.is_empty() {
            current = drop_rows(&current, &flagged)?;
        }
    }

    Ok((current, report))
}

fn remove_against_original(
    dataset: &Dataset,
    columns: &[&str],
) -> CleanResult<(Dataset, Vec<ColumnOutliers>)> {
    let mut flagged = BTreeSet::new();
    let mut report = Vec::with_capacity(columns.len());

    for &column in columns {
        let bounds = outlier_bounds(dataset, column)?;
        let rows = detect_outliers(dataset, column)?;
        report.push(ColumnOutliers {
            column: column.to_string(),
            flagged: rows.len(),
            bounds,
        });
        flagged.extend(rows);
    }

    let cleaned = if flagged.is_empty() {
        dataset.clone()
    } else {
        drop_rows(dataset, &flagged)?
    };
    Ok((cleaned, report))
}

fn drop_rows(dataset: &Dataset, rows: &BTreeSet<usize>) -> CleanResult<Dataset> {
    let mask: BooleanChunked = (0..dataset.height())
        .map(|idx| !rows.contains(&idx))
        .collect();
    let kept = dataset.frame().filter(&mask)?;
    Ok(Dataset::new(kept))
}
