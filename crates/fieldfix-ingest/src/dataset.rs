//! Main-input CSV reading.
//!
//! Cells are stored verbatim: the corrector must not alter data it does not
//! own, so trimming and case-folding happen only inside lookup-key
//! derivation, never at ingest. Target columns are matched case-sensitively
//! against headers exactly as they appear in the file (BOM aside).

use std::path::Path;

use tracing::debug;

use fieldfix_model::{CellValue, Table};

use crate::error::{IngestError, Result};

/// Read an input CSV into a [`Table`].
///
/// The first record is the header row. Records shorter than the header are
/// padded with `Missing`; longer records are truncated to the header width.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::open(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::csv(path, &error))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').to_string())
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, &error))?;
        let row: Vec<CellValue> = (0..table.columns.len())
            .map(|idx| CellValue::from_raw(record.get(idx).unwrap_or("")))
            .collect();
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "read input table"
    );
    Ok(table)
}
