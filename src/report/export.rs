//! JSON export of the cleaning summary

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::OutlierPass;
use crate::report::CleaningSummary;

/// Metadata about the cleaning run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// cortex-clean version
    pub version: String,
    pub input_file: String,
    pub output_file: String,
    pub outlier_pass: OutlierPass,
}

/// Complete export: run metadata plus the stage summary
#[derive(Serialize)]
pub struct SummaryExport<'a> {
    pub metadata: RunMetadata,
    pub summary: &'a CleaningSummary,
}

/// Parameters for the summary export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub output_file: &'a str,
    pub outlier_pass: OutlierPass,
}

/// Build the export document for a summary.
pub fn build_summary_export<'a>(
    summary: &'a CleaningSummary,
    params: &ExportParams<'_>,
) -> SummaryExport<'a> {
    SummaryExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            output_file: params.output_file.to_string(),
            outlier_pass: params.outlier_pass,
        },
        summary,
    }
}

/// Write the summary as pretty JSON, following the same no-clobber rule as
/// the dataset writer. Returns `false` when the file already existed.
pub fn export_summary_json(
    summary: &CleaningSummary,
    output_path: &Path,
    params: &ExportParams<'_>,
) -> Result<bool> {
    let export = build_summary_export(summary, params);

    let file = match OpenOptions::new().write(true).create_new(true).open(output_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to create summary file: {}", output_path.display())
            })
        }
    };

    serde_json::to_writer_pretty(file, &export)
        .with_context(|| format!("Failed to write summary JSON: {}", output_path.display()))?;

    Ok(true)
}
