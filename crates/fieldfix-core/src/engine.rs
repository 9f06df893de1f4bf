//! Column correction and dataset orchestration.

use std::collections::BTreeMap;

use tracing::{debug, info};

use fieldfix_model::{Category, CellOutcome, CellValue, ReferenceSet, Table};

use crate::map::CorrectionMap;
use crate::normalize::normalize_cell;

/// Apply a correction map to one column's cells.
///
/// Output has the same length and order as the input. Per-cell policy:
/// missing or whitespace-only cells are `Empty`, mapped values are `Resolved`
/// with the mapped value verbatim, everything else is `Unmapped`. Pure; never
/// fails regardless of cell content.
pub fn correct_column(cells: &[&CellValue], map: &CorrectionMap) -> Vec<CellOutcome> {
    cells
        .iter()
        .map(|cell| {
            let normalized = normalize_cell(cell);
            if normalized.is_empty() {
                return CellOutcome::Empty;
            }
            match map.resolve(&normalized) {
                Some(correct) => CellOutcome::Resolved(correct.to_string()),
                None => CellOutcome::Unmapped,
            }
        })
        .collect()
}

/// An ordered list of target columns and the category each resolves through.
///
/// Plain configuration data: the corrector walks the targets in order and
/// looks each column up by name at apply time. Several targets may share one
/// category (and therefore one correction map).
#[derive(Debug, Clone)]
pub struct CorrectionPlan {
    pub targets: Vec<(String, Category)>,
}

impl CorrectionPlan {
    pub fn new(targets: Vec<(String, Category)>) -> Self {
        Self { targets }
    }

    /// Categories referenced by at least one target, deduplicated.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for (_, category) in &self.targets {
            if !seen.contains(category) {
                seen.push(*category);
            }
        }
        seen
    }
}

impl Default for CorrectionPlan {
    /// The standard target set: one column per category plus the two
    /// certificate columns, both resolved through the response map.
    fn default() -> Self {
        let mut targets: Vec<(String, Category)> = Category::ALL
            .into_iter()
            .map(|category| (category.as_str().to_string(), category))
            .collect();
        targets.push((
            "tr certificate approved on sip".to_string(),
            Category::Response,
        ));
        targets.push((
            "ar certificate approved on sip".to_string(),
            Category::Response,
        ));
        Self::new(targets)
    }
}

/// Per-column tallies for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: String,
    pub category: Category,
    pub rows: usize,
    pub resolved: usize,
    pub empty: usize,
    pub unmapped: usize,
}

/// Outcome of one correction run over a dataset.
#[derive(Debug, Clone, Default)]
pub struct CorrectionReport {
    pub columns: Vec<ColumnSummary>,
    /// Plan targets whose column was absent from the dataset.
    pub skipped: Vec<(String, Category)>,
}

impl CorrectionReport {
    pub fn total_unmapped(&self) -> usize {
        self.columns.iter().map(|summary| summary.unmapped).sum()
    }

    pub fn total_resolved(&self) -> usize {
        self.columns.iter().map(|summary| summary.resolved).sum()
    }
}

/// Correct every plan target present in the table, in plan order.
///
/// Correction maps are derived fresh from `references` for the categories the
/// plan uses. For each present target the outcome column is inserted
/// immediately to the right of the source column; absent targets are skipped
/// and recorded. The table is mutated in place.
pub fn correct_table(
    table: &mut Table,
    references: &ReferenceSet,
    plan: &CorrectionPlan,
) -> CorrectionReport {
    let mut maps: BTreeMap<Category, CorrectionMap> = BTreeMap::new();
    for category in plan.categories() {
        if let Some(reference) = references.get(category) {
            let map = CorrectionMap::from_reference(reference);
            debug!(category = %category, entries = map.len(), "built correction map");
            maps.insert(category, map);
        }
    }

    let mut report = CorrectionReport::default();
    for (column, category) in &plan.targets {
        // Resolve by name at apply time: earlier insertions have already
        // shifted positional indexes.
        let Some(index) = table.column_index(column) else {
            debug!(column = %column, "target column absent, skipping");
            report.skipped.push((column.clone(), *category));
            continue;
        };
        let Some(map) = maps.get(category) else {
            report.skipped.push((column.clone(), *category));
            continue;
        };

        let outcomes = correct_column(&table.column_values(index), map);
        let summary = summarize(column, *category, &outcomes);
        info!(
            column = %column,
            category = %category,
            rows = summary.rows,
            resolved = summary.resolved,
            unmapped = summary.unmapped,
            "corrected column"
        );

        let cells: Vec<CellValue> = outcomes.into_iter().map(CellOutcome::into_cell).collect();
        table.insert_column(index + 1, format!("correct {column}"), cells);
        report.columns.push(summary);
    }
    report
}

fn summarize(column: &str, category: Category, outcomes: &[CellOutcome]) -> ColumnSummary {
    let mut summary = ColumnSummary {
        column: column.to_string(),
        category,
        rows: outcomes.len(),
        resolved: 0,
        empty: 0,
        unmapped: 0,
    };
    for outcome in outcomes {
        match outcome {
            CellOutcome::Resolved(_) => summary.resolved += 1,
            CellOutcome::Empty => summary.empty += 1,
            CellOutcome::Unmapped => summary.unmapped += 1,
        }
    }
    summary
}
