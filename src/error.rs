//! Error types for the cleaning pipeline.
//!
//! Every stage returns `Result<_, CleanError>`. The binary wraps these in
//! `anyhow` with stage context; library callers can match on the variants.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while loading, transforming or saving a dataset.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The input path does not resolve to a file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The input is not well-formed delimited text.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// A numeric operation was requested on a non-numeric column, or a
    /// column does not have the kind a declared schema expects.
    #[error("Column '{column}' is {actual}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    /// A referenced column is not present in the dataset.
    #[error("Column '{column}' not found. Available columns: {available:?}")]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Missing-ratio threshold outside `[0, 1]`.
    #[error("Missing value threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl CleanError {
    pub(crate) fn column_not_found(column: &str, available: &[String]) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            available: available.to_vec(),
        }
    }
}

/// Result alias used throughout the library.
pub type CleanResult<T> = Result<T, CleanError>;
