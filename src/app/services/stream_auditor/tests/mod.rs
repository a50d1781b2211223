//! Test utilities shared across the stream auditor test modules

use std::io::Cursor;

use super::stats::AuditSummary;
use super::tokenizer::{Row, RowTokenizer};
use crate::StreamAuditor;
use crate::config::AuditConfig;


/// Checksum-correct code used throughout the fixtures
pub const VALID_EAN: &str = "4065418448246";

/// Same code with the check digit bumped
pub const INVALID_EAN: &str = "4065418448247";

/// Build a row from string literals
pub fn row(fields: &[&str]) -> Row {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Tokenize an entire input, dropping nothing
pub fn tokenize_all(input: &str, delimiter: char) -> Vec<Row> {
    let mut tokenizer = RowTokenizer::new(Cursor::new(input.as_bytes()), delimiter);
    let mut rows = Vec::new();
    while let Some(parsed) = tokenizer.read_row().unwrap() {
        rows.push(parsed);
    }
    rows
}

/// Audit an in-memory input with the default configuration
pub fn audit_str(input: &str) -> AuditSummary {
    StreamAuditor::new(AuditConfig::default())
        .audit(Cursor::new(input.as_bytes()))
        .unwrap()
}
