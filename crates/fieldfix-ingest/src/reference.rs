//! Reference workbook loading.
//!
//! The workbook is a directory holding one CSV sheet per category
//! (`trade.csv`, `state.csv`, ...). Each sheet carries exactly two structural
//! columns, `incorrect {category}` and `correct {category}`. Loading is fatal
//! on a missing sheet or missing structural column: a correction run cannot
//! proceed without all five categories.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use fieldfix_model::{Category, ReferenceSet, ReferenceTable};

use crate::error::{IngestError, Result};

/// Path of a category's sheet inside the workbook directory.
pub fn sheet_path(dir: &Path, category: Category) -> PathBuf {
    dir.join(format!("{}.csv", category.as_str()))
}

/// Load all five reference sheets from `dir`.
pub fn load_reference_dir(dir: &Path) -> Result<ReferenceSet> {
    let mut set = ReferenceSet::new();
    for category in Category::ALL {
        let path = sheet_path(dir, category);
        if !path.is_file() {
            return Err(IngestError::MissingSheet { category, path });
        }
        let table = load_reference_sheet(category, &path)?;
        debug!(category = %category, rows = table.rows.len(), "loaded reference sheet");
        set.insert(table);
    }
    info!(dir = %dir.display(), "loaded reference workbook");
    Ok(set)
}

/// Load a single reference sheet.
pub fn load_reference_sheet(category: Category, path: &Path) -> Result<ReferenceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::open(path, error))?;

    let headers = reader
        .headers()
        .map_err(|error| IngestError::csv(path, &error))?
        .clone();

    let incorrect_header = category.incorrect_header();
    let correct_header = category.correct_header();
    let incorrect_idx = header_index(&headers, &incorrect_header)
        .ok_or_else(|| missing_column(path, &incorrect_header))?;
    let correct_idx = header_index(&headers, &correct_header)
        .ok_or_else(|| missing_column(path, &correct_header))?;

    let mut table = ReferenceTable::new(category);
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, &error))?;
        let incorrect = record.get(incorrect_idx).unwrap_or("");
        let correct = record.get(correct_idx).unwrap_or("");
        table.push(incorrect, correct);
    }
    Ok(table)
}

/// Structural headers match exactly after stripping a UTF-8 BOM.
fn header_index(headers: &csv::StringRecord, wanted: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_matches('\u{feff}') == wanted)
}

fn missing_column(path: &Path, column: &str) -> IngestError {
    IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    }
}
