//! GTIN Auditor Library
//!
//! A Rust library for auditing delimited product feeds against the
//! GTIN/EAN-13 checksum specification.
//!
//! This library provides tools for:
//! - Tokenizing delimited text streams row by row with double-quote awareness
//! - Locating the EAN column from a header row, with headerless fallback
//! - Validating codes via EAN-13 checksum math and zero-padding normalization
//! - Aggregating valid/invalid counts into a single summary line
//! - Comprehensive error handling with graceful degradation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod services {
        pub mod ean;
        pub mod stream_auditor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::services::stream_auditor::{AuditSummary, StreamAuditor};
pub use config::AuditConfig;

/// Result type alias for the GTIN auditor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for GTIN audit operations
///
/// Row-level problems (bad checksums, short rows, non-digit codes) are not
/// errors: they fold into the invalid count. These variants cover the
/// failures that abort an audit.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Checksum engine received a payload that is not exactly 12 digits.
    /// Internal contract violation: the validator normalizes every code to
    /// 13 digits before splitting off the payload.
    #[error("Checksum payload must be exactly {expected} digits, got {found}")]
    ChecksumPayload { expected: usize, found: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a checksum payload error
    pub fn checksum_payload(expected: usize, found: usize) -> Self {
        Self::ChecksumPayload { expected, found }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
