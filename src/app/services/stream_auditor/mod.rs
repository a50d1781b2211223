//! Stream auditor for delimited GTIN/EAN feeds
//!
//! This module turns a raw character stream into a valid/invalid row count.
//! It is organized into logical components:
//! - [`tokenizer`] - Quote-aware, pull-based row tokenization
//! - [`column_mapping`] - EAN column resolution from the first row
//! - [`classifier`] - Per-row field extraction and validation
//! - [`auditor`] - Orchestration: sentinel handling, counting, short-circuit
//! - [`stats`] - Audit summary and result rendering
//!
//! ## Usage
//!
//! ```rust
//! use gtin_auditor::app::services::stream_auditor::StreamAuditor;
//! use gtin_auditor::config::AuditConfig;
//!
//! # fn example() -> gtin_auditor::Result<()> {
//! let input = "name,ean,price\nWidget,4065418448246,10\n";
//! let auditor = StreamAuditor::new(AuditConfig::default());
//! let summary = auditor.audit(input.as_bytes())?;
//!
//! println!("{}", summary.render());
//! # Ok(())
//! # }
//! ```

pub mod auditor;
pub mod classifier;
pub mod column_mapping;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use auditor::StreamAuditor;
pub use column_mapping::ColumnSelection;
pub use stats::AuditSummary;
pub use tokenizer::{Row, RowTokenizer};
