//! Shared test utilities and fixture generators

#![allow(dead_code)]

use cortex_clean::pipeline::Dataset;
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small cortex-style DataFrame with known characteristics
///
/// This DataFrame includes:
/// - `MouseID`, `Genotype`, `Treatment`: categorical identifiers
/// - `BDNF_N`: one missing value (25%)
/// - `pCREB_N`: one missing value (25%)
/// - `Extra`: every value missing
pub fn create_cortex_dataframe() -> DataFrame {
    df! {
        "MouseID" => ["M1", "M2", "M3", "M4"],
        "Genotype" => ["A", "B", "A", "B"],
        "Treatment" => ["X", "Y", "X", "Y"],
        "BDNF_N" => [Some(0.5f64), Some(0.7), None, Some(1.2)],
        "pCREB_N" => [Some(0.3f64), Some(0.8), Some(1.1), None],
        "Extra" => [None::<f64>, None, None, None],
    }
    .unwrap()
}

/// Create a DataFrame with specific missing value patterns
///
/// - `A`: 20% missing, mean of the rest is 2.75
/// - `B`: 40% missing, mean of the rest is 26.666...
/// - `C`: 100% missing
/// - `D`: complete
pub fn create_missing_test_dataframe() -> DataFrame {
    df! {
        "A" => [Some(1.0f64), Some(2.0), Some(3.0), None, Some(5.0)],
        "B" => [Some(10.0f64), None, Some(30.0), Some(40.0), None],
        "C" => [None::<f64>, None, None, None, None],
        "D" => [5.0f64, 15.0, 25.0, 35.0, 45.0],
    }
    .unwrap()
}

/// Two measurements whose outlier removal depends on the order they are
/// processed in.
///
/// - `x` alone flags row 7 (value 100)
/// - `y` alone flags rows 3 and 6 (value 30)
/// - after removing row 7, `y` flags nothing
/// - after removing rows 3 and 6, `x` flags rows 2 and 7
pub fn create_order_dependent_dataframe() -> DataFrame {
    df! {
        "id" => ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"],
        "x" => [4.0f64, 5.0, 1.0, 2.0, 5.0, 6.0, 5.0, 100.0],
        "y" => [16.0f64, 16.0, 14.0, 30.0, 14.0, 12.0, 30.0, 12.0],
    }
    .unwrap()
}

/// Create a larger random DataFrame with random missing cells
pub fn create_random_missing_dataframe(rows: usize, cols: usize, seed: u64) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let columns: Vec<Column> = (0..cols)
        .map(|i| {
            let missing_rate: f64 = rng.gen();
            let values: Vec<Option<f64>> = (0..rows)
                .map(|_| {
                    if rng.gen::<f64>() < missing_rate {
                        None
                    } else {
                        Some(rng.gen::<f64>() * 10.0)
                    }
                })
                .collect();
            Column::new(format!("feature_{}", i).into(), values)
        })
        .collect();

    DataFrame::new(columns).unwrap()
}

/// Raw CSV text resembling the cortex nuclear dataset
pub const CORTEX_CSV: &str = "\
MouseID,DYRK1A_N,BDNF_N,pCREB_N,Sparse_N,Genotype,Treatment,class
309_1,0.50,0.43,0.21,,Control,Memantine,c-CS-m
309_2,0.51,0.41,0.22,,Control,Memantine,c-CS-m
309_3,0.52,,0.20,0.9,Control,Memantine,c-CS-m
309_4,0.49,0.44,,,Control,Memantine,c-CS-m
309_5,0.50,0.42,0.23,,Control,Memantine,c-CS-m
3415_1,0.48,0.40,0.19,,Ts65Dn,Saline,t-CS-s
3415_2,0.47,0.39,0.20,,Ts65Dn,Saline,t-CS-s
3415_3,0.46,0.45,0.21,,Ts65Dn,Saline,t-CS-s
3415_4,0.45,0.43,0.22,1.1,Ts65Dn,Saline,t-CS-s
3415_5,0.44,4.00,0.20,,Ts65Dn,Saline,t-CS-s
";

/// Write raw CSV text into a fresh temporary directory
pub fn write_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Values of a column as `Option<f64>`
pub fn f64_values(dataset: &Dataset, name: &str) -> Vec<Option<f64>> {
    let values = dataset.numeric_values(name).unwrap();
    values.into_iter().collect()
}

/// String values of a column
pub fn str_values(dataset: &Dataset, name: &str) -> Vec<String> {
    dataset
        .frame()
        .column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

/// Assert that a dataset has expected shape
pub fn assert_shape(dataset: &Dataset, expected_rows: usize, expected_cols: usize) {
    assert_eq!(
        dataset.height(),
        expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows,
        dataset.height()
    );
    assert_eq!(
        dataset.width(),
        expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols,
        dataset.width()
    );
}

/// Assert that a dataset contains specific columns
pub fn assert_has_columns(dataset: &Dataset, expected_cols: &[&str]) {
    let actual_cols = dataset.column_names();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a dataset does NOT contain specific columns
pub fn assert_missing_columns(dataset: &Dataset, unexpected_cols: &[&str]) {
    let actual_cols = dataset.column_names();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
