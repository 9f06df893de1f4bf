//! Canonicalization of free text for lookup-key comparison.

use fieldfix_model::CellValue;

/// Trim leading/trailing whitespace and collapse every internal run of
/// whitespace to a single space.
///
/// Total over any cell text and idempotent.
pub fn normalize(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalize a cell; `Missing` becomes the empty string.
pub fn normalize_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(text) => normalize(text),
        CellValue::Missing => String::new(),
    }
}

/// The correction-map lookup key for a raw value: normalized, lowercased.
pub fn lookup_key(raw: &str) -> String {
    normalize(raw).to_lowercase()
}
