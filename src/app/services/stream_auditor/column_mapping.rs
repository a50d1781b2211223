//! EAN column resolution from the first row of a stream
//!
//! The first row decides where every later row's EAN code lives. A header
//! row names the column; a headerless feed is recognized by its first field
//! already being a valid EAN code.

use tracing::{debug, warn};

use super::tokenizer::Row;
use crate::app::services::ean;

/// How the EAN column was resolved from the first row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    /// First row is a header naming the column; it contributes no count
    Header { index: usize },

    /// First row is itself a data row with a valid EAN in column 0
    Headerless { index: usize },
}

impl ColumnSelection {
    /// The field index holding EAN codes for every data row
    pub fn index(&self) -> usize {
        match *self {
            ColumnSelection::Header { index } => index,
            ColumnSelection::Headerless { index } => index,
        }
    }
}

/// Locate the EAN column in the first row of a stream.
///
/// Exactly one field whose trimmed text equals `column_name` wins. Zero
/// matches fall back to headerless detection. Duplicate matches mean the
/// file is structurally malformed and no column is usable.
pub fn locate_ean_column(first_row: &Row, column_name: &str) -> Option<ColumnSelection> {
    let mut found: Option<usize> = None;

    for (index, field) in first_row.iter().enumerate() {
        if field.trim() != column_name {
            continue;
        }
        if found.is_some() {
            warn!("Duplicate '{}' column in header row", column_name);
            return None;
        }
        found = Some(index);
    }

    if let Some(index) = found {
        debug!("Header row names '{}' at column {}", column_name, index);
        return Some(ColumnSelection::Header { index });
    }

    // No header match: a feed starting with a valid EAN has no header row
    // and carries its codes in the first column.
    match first_row.first() {
        Some(field) if ean::is_valid(field.trim()) => {
            debug!("No header row; first field is a valid EAN, using column 0");
            Some(ColumnSelection::Headerless { index: 0 })
        }
        _ => {
            warn!("No usable '{}' column in first row", column_name);
            None
        }
    }
}
