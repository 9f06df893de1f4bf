//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use fieldfix_core::{CorrectionPlan, correct_table};
use fieldfix_ingest::{load_reference_dir, read_table};
use fieldfix_output::write_table;

use crate::cli::CorrectArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

const DEFAULT_OUTPUT_NAME: &str = "cleaned_data.csv";

pub fn run_correct(args: &CorrectArgs) -> Result<RunResult> {
    let span = info_span!("correct", input = %args.input.display());
    let _guard = span.enter();

    let references = load_reference_dir(&args.refs)
        .with_context(|| format!("load reference workbook: {}", args.refs.display()))?;
    let mut table = read_table(&args.input)
        .with_context(|| format!("read input: {}", args.input.display()))?;

    let plan = CorrectionPlan::default();
    let report = correct_table(&mut table, &references, &plan);
    info!(
        columns = report.columns.len(),
        skipped = report.skipped.len(),
        unmapped = report.total_unmapped(),
        "correction run complete"
    );

    let output = if args.dry_run {
        None
    } else {
        let path = output_path(args);
        write_table(&table, &path)?;
        info!(output = %path.display(), "wrote corrected dataset");
        Some(path)
    };

    Ok(RunResult {
        input: args.input.clone(),
        output,
        rows: table.row_count(),
        report,
    })
}

/// Resolved output path: explicit `--output`, else `cleaned_data.csv` next to
/// the input.
pub fn output_path(args: &CorrectArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.input.with_file_name(DEFAULT_OUTPUT_NAME))
}

pub fn run_categories() -> Result<()> {
    let plan = CorrectionPlan::default();
    let mut table = Table::new();
    table.set_header(vec!["Target column", "Category", "Reference headers"]);
    apply_table_style(&mut table);
    for (column, category) in &plan.targets {
        table.add_row(vec![
            column.clone(),
            category.as_str().to_string(),
            format!(
                "{} / {}",
                category.incorrect_header(),
                category.correct_header()
            ),
        ]);
    }
    println!("{table}");
    Ok(())
}
