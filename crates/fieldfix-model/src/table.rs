#![deny(unsafe_code)]

/// A single cell of the input dataset.
///
/// `Missing` is reserved for cells that were truly empty in the source.
/// Whitespace-only text stays `Text`; the correction engine decides how to
/// treat it, not the model.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// The text to write on export. `Missing` renders as the empty field.
    pub fn as_output(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// An ordered tabular dataset.
///
/// Columns and row cells are positionally aligned: `rows[r][c]` belongs to
/// `columns[c]`. Column order is caller-visible and preserved except for
/// insertions made through [`Table::insert_column`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact, case-sensitive name match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of the column at `index`, in row order.
    pub fn column_values(&self, index: usize) -> Vec<&CellValue> {
        self.rows.iter().map(|row| &row[index]).collect()
    }

    /// Insert a new column at `index`, shifting later columns right.
    ///
    /// `cells` must have one entry per row; short rows are padded with
    /// `Missing` so a ragged source file cannot corrupt alignment.
    pub fn insert_column(&mut self, index: usize, name: String, cells: Vec<CellValue>) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, name);
        let mut cells = cells.into_iter();
        for row in &mut self.rows {
            let cell = cells.next().unwrap_or(CellValue::Missing);
            let at = index.min(row.len());
            row.insert(at, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn from_raw_maps_empty_to_missing() {
        assert_eq!(CellValue::from_raw(""), CellValue::Missing);
        assert_eq!(CellValue::from_raw("  "), text("  "));
        assert_eq!(CellValue::from_raw("x"), text("x"));
    }

    #[test]
    fn insert_column_shifts_following_columns() {
        let mut table = Table::new(vec!["id".to_string(), "trade".to_string()]);
        table.push_row(vec![text("1"), text("Farming")]);
        table.push_row(vec![text("2"), CellValue::Missing]);

        table.insert_column(
            1,
            "correct id".to_string(),
            vec![text("one"), text("two")],
        );

        assert_eq!(table.columns, vec!["id", "correct id", "trade"]);
        assert_eq!(table.rows[0][2], text("Farming"));
        assert_eq!(table.rows[1][1], text("two"));
    }

    #[test]
    fn insert_column_pads_short_rows() {
        let mut table = Table::new(vec!["a".to_string()]);
        table.push_row(vec![text("1")]);
        table.push_row(vec![text("2")]);

        table.insert_column(1, "b".to_string(), vec![text("only")]);

        assert_eq!(table.rows[0][1], text("only"));
        assert_eq!(table.rows[1][1], CellValue::Missing);
    }

    #[test]
    fn column_index_is_case_sensitive() {
        let table = Table::new(vec!["Trade".to_string()]);
        assert_eq!(table.column_index("Trade"), Some(0));
        assert_eq!(table.column_index("trade"), None);
    }
}
