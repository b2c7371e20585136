//! Descriptive statistics for a dataset
//!
//! Profiling is read-only: it never modifies the dataset it is given.
//! Rendering lives in [`crate::report::profile`].

use polars::prelude::*;
use serde::Serialize;

use super::dataset::Dataset;
use super::schema::ColumnKind;
use crate::error::CleanResult;

/// Summary statistics of a numeric column over its non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub dtype: String,
    pub missing: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// Shape and per-column profile of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    pub column_profiles: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_profiles.iter().find(|c| c.name == name)
    }

    pub fn total_missing(&self) -> usize {
        self.column_profiles.iter().map(|c| c.missing).sum()
    }
}

/// Compute the profile of a dataset.
pub fn profile_dataset(dataset: &Dataset) -> CleanResult<DatasetProfile> {
    let df = dataset.frame();
    let mut column_profiles = Vec::with_capacity(df.width());

    for spec in dataset.schema().columns() {
        let column = df.column(&spec.name)?;
        let numeric = match spec.kind {
            ColumnKind::Numeric => Some(summarize_numeric(&dataset.numeric_values(&spec.name)?)?),
            ColumnKind::Categorical => None,
        };

        column_profiles.push(ColumnProfile {
            name: spec.name.clone(),
            kind: spec.kind,
            dtype: column.dtype().to_string(),
            missing: column.null_count(),
            numeric,
        });
    }

    Ok(DatasetProfile {
        rows: df.height(),
        columns: df.width(),
        column_profiles,
    })
}

/// Describe a numeric column the way a `describe()` table would.
pub fn summarize_numeric(values: &Float64Chunked) -> CleanResult<NumericSummary> {
    Ok(NumericSummary {
        count: values.len() - values.null_count(),
        mean: values.mean(),
        std: values.std(1),
        min: values.min(),
        q1: values.quantile(0.25, QuantileMethod::Linear)?,
        median: values.median(),
        q3: values.quantile(0.75, QuantileMethod::Linear)?,
        max: values.max(),
    })
}
