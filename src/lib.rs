//! cortex-clean: Dataset Cleaning Library
//!
//! A library for cleaning tabular expression data using
//! missing value pruning, mean imputation, and IQR-based outlier removal.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::{CleanError, CleanResult};
