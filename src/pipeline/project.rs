//! Column projection

use super::dataset::Dataset;
use crate::error::{CleanError, CleanResult};

/// Keep exactly `columns`, in the given order.
///
/// # Errors
/// * `ColumnNotFound` - a requested column is absent
pub fn select_columns(dataset: &Dataset, columns: &[&str]) -> CleanResult<Dataset> {
    let available = dataset.column_names();
    if let Some(missing) = columns.iter().find(|c| !available.iter().any(|a| a == *c)) {
        return Err(CleanError::column_not_found(missing, &available));
    }

    let projected = dataset.frame().select(columns.iter().copied())?;
    Ok(Dataset::new(projected))
}
