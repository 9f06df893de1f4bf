pub mod category;
pub mod outcome;
pub mod reference;
pub mod table;

pub use category::{Category, UnknownCategory};
pub use outcome::{CellOutcome, UNRESOLVED_MARKER};
pub use reference::{ReferenceRow, ReferenceSet, ReferenceTable};
pub use table::{CellValue, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_serializes() {
        let mut table = Table::new(vec!["id".to_string(), "trade".to_string()]);
        table.push_row(vec![
            CellValue::Text("1".to_string()),
            CellValue::Missing,
        ]);

        let json = serde_json::to_string(&table).expect("serialize table");
        let round: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round.columns, table.columns);
        assert_eq!(round.rows, table.rows);
    }

    #[test]
    fn reference_set_round_trips() {
        let mut set = ReferenceSet::new();
        let mut trade = ReferenceTable::new(Category::Trade);
        trade.push("farming", "Farming");
        set.insert(trade);

        let json = serde_json::to_string(&set).expect("serialize reference set");
        let round: ReferenceSet = serde_json::from_str(&json).expect("deserialize reference set");
        let table = round.get(Category::Trade).expect("trade table");
        assert_eq!(table.rows[0].correct, "Farming");
    }
}
