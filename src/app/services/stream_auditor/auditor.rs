//! Core stream audit orchestration
//!
//! This module drives the single-threaded pull loop: tokenize a row,
//! resolve the EAN column from the first row, classify every later row, and
//! fold the verdicts into the summary counters.

use std::io::BufRead;

use tracing::{debug, info, warn};

use super::classifier::classify_row;
use super::column_mapping::{ColumnSelection, locate_ean_column};
use super::stats::AuditSummary;
use super::tokenizer::{Row, RowTokenizer};
use crate::Result;
use crate::config::AuditConfig;
use crate::constants::EXIT_SENTINEL;

/// Auditor for delimited GTIN/EAN feeds
///
/// Consumes a stream exactly once and produces aggregate counts. Row-level
/// problems never abort the audit; a structurally malformed first row
/// degrades to the canonical zero/zero summary.
#[derive(Debug)]
pub struct StreamAuditor {
    config: AuditConfig,
}

impl StreamAuditor {
    /// Create a new auditor with the given configuration
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Audit a stream to exhaustion (or to the exit sentinel).
    ///
    /// Returns `Err` only for I/O failures on the underlying reader; every
    /// data-shape problem folds into the summary instead.
    pub fn audit<R: BufRead>(&self, reader: R) -> Result<AuditSummary> {
        let mut tokenizer = RowTokenizer::new(reader, self.config.delimiter);
        let mut summary = AuditSummary::new();
        let mut column_index: Option<usize> = None;

        while let Some(row) = tokenizer.read_row()? {
            if row.is_empty() {
                summary.record_skipped();
                continue;
            }

            if is_exit_row(&row) {
                debug!("Exit sentinel encountered, ending audit");
                break;
            }

            match column_index {
                None => match locate_ean_column(&row, &self.config.column_name) {
                    Some(ColumnSelection::Header { index }) => {
                        column_index = Some(index);
                    }
                    Some(ColumnSelection::Headerless { index }) => {
                        // The first row already carries data; its first
                        // field was just validated by the locator.
                        column_index = Some(index);
                        summary.record(true);
                    }
                    None => {
                        warn!("Malformed first row, reporting zero counts");
                        return Ok(AuditSummary::new());
                    }
                },
                Some(index) => summary.record(classify_row(&row, index)),
            }
        }

        info!(
            "Audit complete: {} valid, {} invalid ({} rows skipped)",
            summary.valid_rows, summary.invalid_rows, summary.rows_skipped
        );

        Ok(summary)
    }
}

/// A single-field row whose trimmed content is the exit token ends the
/// stream early; it is never counted as data.
fn is_exit_row(row: &Row) -> bool {
    row.len() == 1 && row[0].trim() == EXIT_SENTINEL
}
