//! Cleaning summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::pipeline::{ColumnFill, ColumnOutliers, SaveOutcome};

/// Summary of one cleaning run
#[derive(Debug, Default, Serialize)]
pub struct CleaningSummary {
    pub initial_rows: usize,
    pub initial_columns: usize,
    pub final_rows: usize,
    pub final_columns: usize,
    pub missing_threshold: f64,
    pub dropped_missing: Vec<String>,
    pub filled: Vec<ColumnFill>,
    pub outliers: Vec<ColumnOutliers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<SaveOutcome>,
}

impl CleaningSummary {
    pub fn new(initial_rows: usize, initial_columns: usize, missing_threshold: f64) -> Self {
        Self {
            initial_rows,
            initial_columns,
            final_rows: initial_rows,
            final_columns: initial_columns,
            missing_threshold,
            ..Default::default()
        }
    }

    pub fn add_missing_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_missing = columns;
    }

    pub fn set_fills(&mut self, fills: Vec<ColumnFill>) {
        self.filled = fills;
    }

    pub fn add_outlier_removal(&mut self, report: Vec<ColumnOutliers>, remaining_rows: usize) {
        self.outliers = report;
        self.final_rows = remaining_rows;
    }

    /// Record the projection width and save outcome.
    pub fn set_output(&mut self, columns: usize, outcome: SaveOutcome) {
        self.final_columns = columns;
        self.save = Some(outcome);
    }

    pub fn total_filled(&self) -> usize {
        self.filled.iter().map(|f| f.filled).sum()
    }

    /// Rows removed by the outlier stage.
    pub fn rows_removed(&self) -> usize {
        self.initial_rows - self.final_rows
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CLEANING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Initial Shape"),
            Cell::new(format!("{} × {}", self.initial_rows, self.initial_columns)),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Missing)"),
            Cell::new(self.dropped_missing.len()).fg(if self.dropped_missing.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("🩹 Cells Imputed"),
            Cell::new(self.total_filled()),
        ]);

        table.add_row(vec![
            Cell::new("✂️  Rows Removed (Outliers)"),
            Cell::new(self.rows_removed()).fg(if self.rows_removed() == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Final Shape"),
            Cell::new(format!("{} × {}", self.final_rows, self.final_columns))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let output = match self.save {
            Some(SaveOutcome::Written { .. }) => Cell::new("written").fg(Color::Green),
            Some(SaveOutcome::Skipped) => Cell::new("skipped (file exists)").fg(Color::Yellow),
            None => Cell::new("-"),
        };
        table.add_row(vec![Cell::new("💾 Output"), output]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped_missing.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("High Missing Values").yellow(),
                style(format!("(>{:.1}%, {})", self.missing_threshold * 100.0, self.dropped_missing.len())).dim()
            );
            for column in &self.dropped_missing {
                println!("        {} {}", style("•").dim(), column);
            }
        }

        if !self.outliers.is_empty() {
            println!();
            println!("      {}:", style("Outliers").yellow());
            for entry in &self.outliers {
                println!(
                    "        {} {}: {}",
                    style("•").dim(),
                    entry.column,
                    style(entry.flagged).yellow().bold()
                );
            }
        }
    }
}
