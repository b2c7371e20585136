//! Console rendering of dataset profiles

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{ColumnKind, DatasetProfile};

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{:.4}", v)).set_alignment(CellAlignment::Right),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

impl DatasetProfile {
    /// Print shape, per-column type and missing counts, and numeric summaries.
    pub fn display(&self, title: &str) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style(title.to_uppercase()).white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!("      Rows: {}", style(self.rows).yellow());
        println!("      Columns: {}", style(self.columns).yellow());
        println!();

        let mut types = Table::new();
        types.load_preset(UTF8_FULL_CONDENSED);
        types.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Missing").add_attribute(Attribute::Bold),
        ]);
        for column in &self.column_profiles {
            types.add_row(vec![
                Cell::new(&column.name),
                Cell::new(&column.dtype),
                Cell::new(column.kind),
                Cell::new(column.missing).fg(if column.missing == 0 {
                    Color::White
                } else {
                    Color::Yellow
                }),
            ]);
        }
        print_indented(&types);

        let numeric: Vec<_> = self
            .column_profiles
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
            .filter_map(|c| c.numeric.as_ref().map(|s| (&c.name, s)))
            .collect();
        if numeric.is_empty() {
            return;
        }

        println!();
        println!(
            "      {}",
            style("Statistical summary of numeric columns").yellow()
        );
        let mut stats = Table::new();
        stats.load_preset(UTF8_FULL_CONDENSED);
        stats.set_header(
            ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"]
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
        for (name, summary) in numeric {
            stats.add_row(vec![
                Cell::new(name),
                Cell::new(summary.count).set_alignment(CellAlignment::Right),
                stat_cell(summary.mean),
                stat_cell(summary.std),
                stat_cell(summary.min),
                stat_cell(summary.q1),
                stat_cell(summary.median),
                stat_cell(summary.q3),
                stat_cell(summary.max),
            ]);
        }
        print_indented(&stats);
    }

    /// Print the missing counts of selected columns only.
    pub fn display_missing_counts(&self, columns: &[&str]) {
        for name in columns {
            let missing = self.column(name).map(|c| c.missing).unwrap_or(0);
            println!(
                "      {:<16} {}",
                name,
                if missing == 0 {
                    style(missing).green()
                } else {
                    style(missing).red()
                }
            );
        }
    }
}
