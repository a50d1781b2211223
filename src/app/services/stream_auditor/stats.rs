//! Audit statistics and result rendering

/// Running counts for one stream audit
///
/// Only aggregates are kept; no per-row verdict survives classification.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuditSummary {
    /// Number of data rows classified
    pub data_rows: usize,

    /// Rows whose EAN field passed validation
    pub valid_rows: usize,

    /// Rows whose EAN field failed validation
    pub invalid_rows: usize,

    /// Empty rows skipped without classification
    pub rows_skipped: usize,
}

impl AuditSummary {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            data_rows: 0,
            valid_rows: 0,
            invalid_rows: 0,
            rows_skipped: 0,
        }
    }

    /// Record one classified row
    pub fn record(&mut self, valid: bool) {
        self.data_rows += 1;
        if valid {
            self.valid_rows += 1;
        } else {
            self.invalid_rows += 1;
        }
    }

    /// Record one skipped (empty) row
    pub fn record_skipped(&mut self) {
        self.rows_skipped += 1;
    }

    /// Fraction of classified rows that were valid, as a percentage
    pub fn validity_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            (self.valid_rows as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// Canonical result line: valid and invalid counts, space separated
    pub fn render(&self) -> String {
        format!("{} {}", self.valid_rows, self.invalid_rows)
    }
}

impl Default for AuditSummary {
    fn default() -> Self {
        Self::new()
    }
}
