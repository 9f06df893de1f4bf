//! Correction maps derived from reference tables.

use std::collections::HashMap;

use fieldfix_model::ReferenceTable;

use crate::normalize::lookup_key;

/// Normalized-key lookup from a known-incorrect value to its correction.
///
/// Built once per category at the start of a run and read-only afterwards.
/// One map may back several target columns.
#[derive(Debug, Clone, Default)]
pub struct CorrectionMap {
    entries: HashMap<String, String>,
}

impl CorrectionMap {
    /// Build a map from a reference table.
    ///
    /// Keys are `lookup_key(incorrect)`. Duplicate keys resolve last-wins:
    /// reference row order is authoritative, a later row overwrites an
    /// earlier one. A row whose incorrect value normalizes to the empty
    /// string is kept under the `""` key; the column engine short-circuits
    /// empty cells before lookup, so that entry is never consulted.
    pub fn from_reference(table: &ReferenceTable) -> Self {
        let mut entries = HashMap::with_capacity(table.rows.len());
        for row in &table.rows {
            entries.insert(lookup_key(&row.incorrect), row.correct.clone());
        }
        Self { entries }
    }

    /// Look up the correction for a raw value.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.entries.get(&lookup_key(raw)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldfix_model::{Category, ReferenceTable};

    fn table(rows: &[(&str, &str)]) -> ReferenceTable {
        let mut table = ReferenceTable::new(Category::Trade);
        for (incorrect, correct) in rows {
            table.push(*incorrect, *correct);
        }
        table
    }

    #[test]
    fn keys_are_case_and_space_insensitive() {
        let map = CorrectionMap::from_reference(&table(&[("Foo Bar", "FooBar")]));
        assert_eq!(map.resolve("foo bar"), Some("FooBar"));
        assert_eq!(map.resolve("FOO   BAR"), Some("FooBar"));
        assert_eq!(map.resolve(" foo bar "), Some("FooBar"));
        assert_eq!(map.resolve("foobar"), None);
    }

    #[test]
    fn later_rows_overwrite_earlier_ones() {
        let map = CorrectionMap::from_reference(&table(&[("x", "A"), ("x", "B")]));
        assert_eq!(map.resolve("x"), Some("B"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn empty_incorrect_value_lands_under_the_empty_key() {
        let map = CorrectionMap::from_reference(&table(&[("   ", "Blank")]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.resolve(""), Some("Blank"));
    }
}
