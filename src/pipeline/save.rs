//! No-clobber CSV writer

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use polars::prelude::*;
use serde::Serialize;

use super::dataset::Dataset;
use crate::error::CleanResult;

/// What happened when saving a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    Written { rows: usize, columns: usize },
    /// A file already existed at the destination; nothing was written.
    Skipped,
}

impl SaveOutcome {
    pub fn was_written(&self) -> bool {
        matches!(self, SaveOutcome::Written { .. })
    }
}

/// Write the dataset as CSV with a header row and no index column.
///
/// An existing file at `path` is never overwritten. The destination is
/// opened with `create_new`, so the check and the creation are one step.
pub fn save_dataset(dataset: &Dataset, path: &Path) -> CleanResult<SaveOutcome> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            log::debug!("{} already exists, skipping write", path.display());
            return Ok(SaveOutcome::Skipped);
        }
        Err(e) => return Err(e.into()),
    };

    let mut df = dataset.frame().clone();
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;

    Ok(SaveOutcome::Written {
        rows: df.height(),
        columns: df.width(),
    })
}
