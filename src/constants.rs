//! Application constants for the GTIN auditor
//!
//! This module contains the code-length thresholds, default stream settings,
//! and sentinel values used throughout the auditor.

// =============================================================================
// GTIN/EAN Code Lengths
// =============================================================================

/// Full length of a GTIN/EAN-13 code, check digit included
pub const EAN13_LENGTH: usize = 13;

/// Number of digits covered by the checksum (everything but the check digit)
pub const EAN13_PAYLOAD_LENGTH: usize = 12;

/// Shortest standard GTIN form (GTIN-8). Anything shorter is rejected
/// outright rather than rescued by zero-padding.
pub const MIN_CODE_LENGTH: usize = 8;

// =============================================================================
// Stream Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default header name of the column holding EAN codes
pub const DEFAULT_EAN_COLUMN: &str = "ean";

/// Quote byte honored by the tokenizer
pub const QUOTE_BYTE: u8 = b'"';

/// A line whose entire trimmed content equals this token ends processing
/// immediately, as if the stream had ended.
pub const EXIT_SENTINEL: &str = "Exit";
