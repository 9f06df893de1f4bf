//! Run summary rendering.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Category"),
        header_cell("Rows"),
        header_cell("Resolved"),
        header_cell("Empty"),
        header_cell("Unmapped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_resolved = 0usize;
    let mut total_empty = 0usize;
    let mut total_unmapped = 0usize;
    for summary in &result.report.columns {
        total_resolved += summary.resolved;
        total_empty += summary.empty;
        total_unmapped += summary.unmapped;
        table.add_row(vec![
            Cell::new(&summary.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.category.as_str()),
            Cell::new(summary.rows),
            count_cell(summary.resolved, Color::Green),
            dim_or_plain(summary.empty),
            count_cell(summary.unmapped, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
        count_cell(total_resolved, Color::Green).add_attribute(Attribute::Bold),
        dim_or_plain(total_empty),
        count_cell(total_unmapped, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.report.skipped.is_empty() {
        println!("Skipped (column not present):");
        for (column, category) in &result.report.skipped {
            println!("- {column} ({category})");
        }
    }
}

/// Shared style for the plain listing tables (`categories`).
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_or_plain(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
