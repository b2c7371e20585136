//! Declared column kinds for a dataset

use std::fmt;

use polars::prelude::*;
use serde::Serialize;

use crate::error::{CleanError, CleanResult};

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    /// Map a polars dtype onto a column kind. Integers and floats are
    /// numeric, everything else (strings, booleans, all-null) is categorical.
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => ColumnKind::Numeric,
            _ => ColumnKind::Categorical,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// A named column with its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn numeric(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
        }
    }

    pub fn categorical(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Categorical,
        }
    }
}

/// Ordered column specs, derived once when a dataset is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSchema {
    columns: Vec<ColumnSpec>,
}

impl DatasetSchema {
    /// Derive the schema of a frame from its dtypes.
    pub fn from_frame(df: &DataFrame) -> Self {
        let columns = df
            .get_columns()
            .iter()
            .map(|c| ColumnSpec {
                name: c.name().to_string(),
                kind: ColumnKind::from_dtype(c.dtype()),
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    /// Look up a column that must be numeric.
    pub fn require_numeric(&self, name: &str) -> CleanResult<()> {
        match self.kind_of(name) {
            Some(ColumnKind::Numeric) => Ok(()),
            Some(actual) => Err(CleanError::TypeMismatch {
                column: name.to_string(),
                expected: ColumnKind::Numeric.to_string(),
                actual: actual.to_string(),
            }),
            None => Err(CleanError::column_not_found(name, &self.names())),
        }
    }

    /// Validate that every expected column is present with the declared kind.
    ///
    /// Extra columns are allowed; the check only covers what callers rely on.
    pub fn require(&self, expected: &[ColumnSpec]) -> CleanResult<()> {
        for spec in expected {
            match self.kind_of(&spec.name) {
                Some(kind) if kind == spec.kind => {}
                Some(actual) => {
                    return Err(CleanError::TypeMismatch {
                        column: spec.name.clone(),
                        expected: spec.kind.to_string(),
                        actual: actual.to_string(),
                    })
                }
                None => return Err(CleanError::column_not_found(&spec.name, &self.names())),
            }
        }
        Ok(())
    }
}
