//! cortex-clean: Dataset Cleaning CLI Tool
//!
//! Loads the cortex nuclear protein expression dataset, drops sparse
//! columns, imputes and trims the measurements of interest, and saves a
//! focused subset.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cortex_clean::cli::Cli;
use cortex_clean::pipeline::{
    drop_columns_with_many_missing, fill_missing_values, load_dataset, profile_dataset,
    remove_outliers, save_dataset, select_columns, CleaningPlan, SaveOutcome,
};
use cortex_clean::report::{export_summary_json, CleaningSummary, ExportParams};
use cortex_clean::utils::{
    create_spinner, finish_with_success, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_success, print_warning,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let plan = CleaningPlan::default();
    let fill_targets = plan.fill_targets();
    let outlier_targets = plan.outlier_targets();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.output, plan.missing_threshold, &fill_targets);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let dataset = load_dataset(&cli.input)
        .with_context(|| format!("Failed to load dataset: {}", cli.input.display()))?;
    finish_with_success(&spinner, "Dataset loaded");
    print_success(&format!(
        "Loaded {} rows × {} columns",
        dataset.height(),
        dataset.width()
    ));
    dataset
        .schema()
        .require(&plan.expected_schema)
        .context("Dataset does not match the expected schema")?;
    log::debug!("load took {:?}", step_start.elapsed());

    // Step 2: Inspect
    print_step_header(2, "Data Overview");
    let profile = profile_dataset(&dataset).context("Failed to profile dataset")?;
    profile.display("Data overview");

    let mut summary = CleaningSummary::new(dataset.height(), dataset.width(), plan.missing_threshold);

    // Step 3: Drop columns with too many missing values
    print_step_header(3, "Missing Value Analysis");
    let (dataset, dropped) = drop_columns_with_many_missing(&dataset, plan.missing_threshold)
        .context("Failed to prune sparse columns")?;
    if dropped.is_empty() {
        print_info("No columns exceed the missing value threshold");
    } else {
        print_count(
            "column(s) with high missing values",
            dropped.len(),
            Some(&format!("(>{:.1}%)", plan.missing_threshold * 100.0)),
        );
        for column in &dropped {
            println!("        {} {}", style("•").dim(), column);
        }
        print_success("Dropped columns with high missing values");
    }
    summary.add_missing_drops(dropped);

    // Step 4: Fill missing values with the column mean
    print_step_header(4, "Mean Imputation");
    let (dataset, fills) =
        fill_missing_values(&dataset, &fill_targets).context("Failed to impute missing values")?;
    for fill in &fills {
        match fill.mean {
            Some(mean) => println!(
                "      {}: filled {} value(s) with mean {}",
                fill.column,
                style(fill.filled).yellow().bold(),
                style(format!("{:.4}", mean)).dim()
            ),
            None => println!("      {}: nothing to fill", fill.column),
        }
    }
    println!("\n      Missing values after filling:");
    profile_dataset(&dataset)?.display_missing_counts(&fill_targets);
    summary.set_fills(fills);

    // Step 5: Remove IQR outliers
    print_step_header(5, "Outlier Removal");
    let (dataset, outliers) = remove_outliers(&dataset, &outlier_targets, plan.outlier_pass)
        .context("Failed to remove outliers")?;
    for entry in &outliers {
        print_count(&format!("outlier(s) in {}", entry.column), entry.flagged, None);
    }
    summary.add_outlier_removal(outliers, dataset.height());
    print_success(&format!("{} row(s) remain", dataset.height()));

    // Step 6: Verify the cleaned table
    print_step_header(6, "Cleaned Data Overview");
    let cleaned_profile = profile_dataset(&dataset).context("Failed to profile cleaned dataset")?;
    cleaned_profile.display("Cleaned data overview");

    // Step 7: Project and save
    print_step_header(7, "Save Results");
    let projected =
        select_columns(&dataset, &plan.projection()).context("Failed to select relevant columns")?;
    let spinner = create_spinner("Writing output file...");
    let outcome = save_dataset(&projected, &cli.output)
        .with_context(|| format!("Failed to save dataset: {}", cli.output.display()))?;
    spinner.finish_and_clear();
    match outcome {
        SaveOutcome::Written { .. } => print_success(&format!(
            "Cleaned and relevant data saved to: {}",
            cli.output.display()
        )),
        SaveOutcome::Skipped => print_warning(&format!(
            "File already exists at: {}. No new file created.",
            cli.output.display()
        )),
    }
    summary.set_output(projected.width(), outcome);

    summary.display();

    if let Some(summary_path) = &cli.summary_json {
        let input_file = cli.input.display().to_string();
        let output_file = cli.output.display().to_string();
        let params = ExportParams {
            input_file: &input_file,
            output_file: &output_file,
            outlier_pass: plan.outlier_pass,
        };
        if export_summary_json(&summary, summary_path, &params)? {
            print_success(&format!("Summary written to {}", summary_path.display()));
        } else {
            print_warning(&format!(
                "Summary file already exists at: {}. No new file created.",
                summary_path.display()
            ));
        }
    }

    print_completion();

    Ok(())
}
