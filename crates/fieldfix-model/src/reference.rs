use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Category;

/// One row of a reference sheet: a known-incorrect spelling and the value it
/// should be corrected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub incorrect: String,
    pub correct: String,
}

/// The authoritative incorrect → correct pairs for one category.
///
/// Row order matters: when two rows normalize to the same lookup key, the
/// later row wins when the correction map is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub category: Category,
    pub rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, incorrect: impl Into<String>, correct: impl Into<String>) {
        self.rows.push(ReferenceRow {
            incorrect: incorrect.into(),
            correct: correct.into(),
        });
    }
}

/// The full set of reference tables, one per category.
///
/// Loaded once per session and passed into each correction run as an explicit
/// dependency; correction maps are re-derived from it per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSet {
    tables: BTreeMap<Category, ReferenceTable>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: ReferenceTable) {
        self.tables.insert(table.category, table);
    }

    pub fn get(&self, category: Category) -> Option<&ReferenceTable> {
        self.tables.get(&category)
    }

    /// Categories that are not present yet; empty when the set is complete.
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| !self.tables.contains_key(category))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_categories().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_categories_reports_gaps() {
        let mut set = ReferenceSet::new();
        set.insert(ReferenceTable::new(Category::Trade));
        set.insert(ReferenceTable::new(Category::Response));

        let missing = set.missing_categories();
        assert_eq!(
            missing,
            vec![Category::State, Category::District, Category::Type]
        );
        assert!(!set.is_complete());
    }

    #[test]
    fn complete_set_has_no_gaps() {
        let mut set = ReferenceSet::new();
        for category in Category::ALL {
            set.insert(ReferenceTable::new(category));
        }
        assert!(set.is_complete());
    }
}
