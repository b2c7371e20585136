//! In-memory table threaded through the cleaning stages

use polars::prelude::*;

use super::schema::{ColumnKind, DatasetSchema};
use crate::error::{CleanError, CleanResult};

/// A DataFrame paired with the schema derived from it.
///
/// The schema is computed once in [`Dataset::new`] and trusted by every
/// stage afterwards. Stages return new datasets instead of mutating.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    schema: DatasetSchema,
}

impl Dataset {
    pub fn new(frame: DataFrame) -> Self {
        let schema = DatasetSchema::from_frame(&frame);
        Self { frame, schema }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema.names()
    }

    /// Missing-marker count of a column.
    pub fn null_count(&self, name: &str) -> CleanResult<usize> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| CleanError::column_not_found(name, &self.column_names()))?;
        Ok(column.null_count())
    }

    /// Values of a numeric column widened to `f64`.
    ///
    /// Fails with `ColumnNotFound` or `TypeMismatch` based on the schema,
    /// without looking at the values.
    pub fn numeric_values(&self, name: &str) -> CleanResult<Float64Chunked> {
        self.schema.require_numeric(name)?;
        let column = self.frame.column(name)?;
        let casted = column.cast(&DataType::Float64)?;
        Ok(casted.f64()?.clone())
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.schema.kind_of(name) == Some(ColumnKind::Numeric)
    }
}

impl From<DataFrame> for Dataset {
    fn from(frame: DataFrame) -> Self {
        Self::new(frame)
    }
}
