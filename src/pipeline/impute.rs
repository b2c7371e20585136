//! Mean imputation for numeric columns

use polars::prelude::*;
use serde::Serialize;

use super::dataset::Dataset;
use crate::error::CleanResult;

/// How many missing cells were filled in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFill {
    pub column: String,
    pub filled: usize,
    /// Mean used as the substitute, `None` when nothing was filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

/// Replace missing values in each named column with that column's mean.
///
/// Columns without missing values are left untouched (including their
/// dtype). A column whose values are all missing has no mean and is left
/// as-is with `filled = 0`. Integer columns are widened to `Float64` when
/// filled.
///
/// # Errors
/// * `ColumnNotFound` - a named column is absent
/// * `TypeMismatch` - a named column is categorical
pub fn fill_missing_values(
    dataset: &Dataset,
    columns: &[&str],
) -> CleanResult<(Dataset, Vec<ColumnFill>)> {
    let mut df = dataset.frame().clone();
    let mut fills = Vec::with_capacity(columns.len());

    for &name in columns {
        let values = dataset.numeric_values(name)?;
        let missing = values.null_count();

        let mean = if missing > 0 { values.mean() } else { None };

        match mean {
            Some(mean) => {
                let filled = values
                    .fill_null_with_values(mean)?
                    .with_name(name.into())
                    .into_series();
                df.with_column(filled)?;
                log::debug!("filled {} missing value(s) in '{}' with {}", missing, name, mean);
                fills.push(ColumnFill {
                    column: name.to_string(),
                    filled: missing,
                    mean: Some(mean),
                });
            }
            None => fills.push(ColumnFill {
                column: name.to_string(),
                filled: 0,
                mean: None,
            }),
        }
    }

    Ok((Dataset::new(df), fills))
}
