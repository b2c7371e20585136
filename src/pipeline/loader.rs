//! Dataset loader for CSV files

use std::path::Path;

use polars::prelude::*;

use super::dataset::Dataset;
use crate::error::{CleanError, CleanResult};

/// Load a comma-separated file with a header row.
///
/// Column types are inferred from a full scan of the file, and the
/// resulting schema is derived once. Empty tokens load as missing.
///
/// # Errors
/// * `FileNotFound` - `path` does not resolve to a file
/// * `Parse` - the content is not well-formed delimited text
pub fn load_dataset(path: &Path) -> CleanResult<Dataset> {
    if !path.is_file() {
        return Err(CleanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| CleanError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    log::debug!(
        "loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(Dataset::new(df))
}

/// Read only the header of a CSV file.
pub fn get_column_names(path: &Path) -> CleanResult<Vec<String>> {
    if !path.is_file() {
        return Err(CleanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let schema = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|mut lf| lf.collect_schema())
        .map_err(|e| CleanError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(schema.iter_names().map(|s| s.to_string()).collect())
}
