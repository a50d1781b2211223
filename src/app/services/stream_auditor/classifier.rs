//! Per-row EAN field extraction and classification

use super::tokenizer::Row;
use crate::app::services::ean;

/// Classify one data row as carrying a valid EAN code or not.
///
/// The field at `column_index` is trimmed and stripped of literal `"`
/// characters before validation; the tokenizer retains quotes, so a quoted
/// code arrives here still wrapped. A row with fewer fields than
/// `column_index + 1` is invalid, never an error.
pub fn classify_row(row: &Row, column_index: usize) -> bool {
    match row.get(column_index) {
        Some(field) => ean::is_valid(&extract_code(field)),
        None => false,
    }
}

/// Normalize a raw field into a candidate code
fn extract_code(field: &str) -> String {
    field.trim().replace('"', "")
}
