//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// cortex-clean - Clean protein expression data: prune sparse columns,
/// impute means and remove IQR outliers
///
/// Thresholds and target columns are fixed; only file locations can be
/// chosen on the command line.
#[derive(Parser, Debug)]
#[command(name = "cortex-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with a header row
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output CSV file for the cleaned, projected dataset.
    /// An existing file is never overwritten.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Also write a JSON summary of the cleaning run to this path.
    /// An existing file is never overwritten.
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}
