//! Fixed cleaning parameters for the cortex nuclear dataset

use super::missing::DEFAULT_MISSING_THRESHOLD;
use super::outliers::OutlierPass;
use super::schema::ColumnSpec;

/// Default location of the raw dataset.
pub const DEFAULT_INPUT_PATH: &str = "./src/Data_Cortex_Nuclear.csv";

/// Default location of the cleaned, projected dataset.
pub const DEFAULT_OUTPUT_PATH: &str = "./src/cleaned_relevant_data.csv";

/// Protein measurements the cleaning focuses on.
pub const MEASUREMENT_COLUMNS: [&str; 2] = ["BDNF_N", "pCREB_N"];

/// Columns kept in the saved dataset, in output order.
pub const RELEVANT_COLUMNS: [&str; 5] = ["MouseID", "Genotype", "Treatment", "BDNF_N", "pCREB_N"];

/// Thresholds and column lists for one run of the pipeline.
///
/// `Default` carries the constants used by the binary; they are not exposed
/// on the command line.
#[derive(Debug, Clone)]
pub struct CleaningPlan {
    pub missing_threshold: f64,
    pub fill_columns: Vec<String>,
    /// Order matters for [`OutlierPass::Sequential`].
    pub outlier_columns: Vec<String>,
    pub outlier_pass: OutlierPass,
    pub keep_columns: Vec<String>,
    /// Columns the input must provide, validated right after loading.
    pub expected_schema: Vec<ColumnSpec>,
}

impl Default for CleaningPlan {
    fn default() -> Self {
        Self {
            missing_threshold: DEFAULT_MISSING_THRESHOLD,
            fill_columns: MEASUREMENT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            outlier_columns: MEASUREMENT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            outlier_pass: OutlierPass::Sequential,
            keep_columns: RELEVANT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            expected_schema: vec![
                ColumnSpec::categorical("MouseID"),
                ColumnSpec::categorical("Genotype"),
                ColumnSpec::categorical("Treatment"),
                ColumnSpec::numeric("BDNF_N"),
                ColumnSpec::numeric("pCREB_N"),
            ],
        }
    }
}

impl CleaningPlan {
    pub fn fill_targets(&self) -> Vec<&str> {
        self.fill_columns.iter().map(String::as_str).collect()
    }

    pub fn outlier_targets(&self) -> Vec<&str> {
        self.outlier_columns.iter().map(String::as_str).collect()
    }

    pub fn projection(&self) -> Vec<&str> {
        self.keep_columns.iter().map(String::as_str).collect()
    }
}
