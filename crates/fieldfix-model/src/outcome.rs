use serde::{Deserialize, Serialize};

use crate::CellValue;

/// Marker written to the corrected column when a non-empty cell has no entry
/// in its correction map. Only the export boundary turns an [`CellOutcome::Unmapped`]
/// outcome into this string.
pub const UNRESOLVED_MARKER: &str = "#N/A";

/// Result of correcting one cell.
///
/// Kept structured inside the core so an unmapped cell is distinguishable
/// from a legitimate data value that happens to equal the marker string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellOutcome {
    /// The cell matched a reference entry; carries the correct value verbatim.
    Resolved(String),
    /// The cell was missing or whitespace-only.
    Empty,
    /// The cell had content but no matching reference entry.
    Unmapped,
}

impl CellOutcome {
    /// Stringify for export: `Resolved` verbatim, `Empty` as the empty field,
    /// `Unmapped` as [`UNRESOLVED_MARKER`].
    pub fn into_cell(self) -> CellValue {
        match self {
            CellOutcome::Resolved(value) => CellValue::Text(value),
            CellOutcome::Empty => CellValue::Missing,
            CellOutcome::Unmapped => CellValue::Text(UNRESOLVED_MARKER.to_string()),
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, CellOutcome::Unmapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_stringify_at_the_boundary() {
        assert_eq!(
            CellOutcome::Resolved("Farming".to_string()).into_cell(),
            CellValue::Text("Farming".to_string())
        );
        assert_eq!(CellOutcome::Empty.into_cell(), CellValue::Missing);
        assert_eq!(
            CellOutcome::Unmapped.into_cell(),
            CellValue::Text("#N/A".to_string())
        );
    }
}
