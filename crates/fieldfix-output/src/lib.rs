//! Corrected-dataset export.
//!
//! Writes a [`Table`] back to CSV: original headers plus the inserted
//! `correct {column}` columns, cells verbatim, `Missing` as an empty field.
//! Re-importing the output yields the same rows, column order, and values.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use fieldfix_model::Table;

/// Write `table` as CSV to `path`.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create output file: {}", path.display()))?;
    render_table(table, file).with_context(|| format!("write output: {}", path.display()))
}

/// Render `table` as CSV to any writer.
pub fn render_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&table.columns)
        .context("write header row")?;
    for row in &table.rows {
        out.write_record(row.iter().map(|cell| cell.as_output()))
            .context("write data row")?;
    }
    out.flush().context("flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldfix_model::CellValue;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn sample() -> Table {
        let mut table = Table::new(vec![
            "id".to_string(),
            "trade".to_string(),
            "correct trade".to_string(),
        ]);
        table.push_row(vec![text("1"), text("Farming "), text("Farming")]);
        table.push_row(vec![text("2"), CellValue::Missing, CellValue::Missing]);
        table
    }

    #[test]
    fn renders_missing_as_empty_field() {
        let mut buffer = Vec::new();
        render_table(&sample(), &mut buffer).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        assert_eq!(rendered, "id,trade,correct trade\n1,Farming ,Farming\n2,,\n");
    }

    #[test]
    fn writes_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned_data.csv");
        write_table(&sample(), &path).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("id,trade,correct trade\n"));
    }
}
