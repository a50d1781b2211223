//! Configuration management and validation.
//!
//! Provides the audit configuration structure with builder-style
//! customization and validation of stream parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_EAN_COLUMN};
use crate::{Error, Result};

/// Configuration for a stream audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Field delimiter character
    pub delimiter: char,

    /// Header name of the column holding EAN codes
    pub column_name: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            column_name: DEFAULT_EAN_COLUMN.to_string(),
        }
    }
}

impl AuditConfig {
    /// Create configuration with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create configuration with a custom EAN column name
    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Validate the configuration for consistency
    ///
    /// The tokenizer works on single bytes, so the delimiter must be ASCII,
    /// and it cannot collide with the quote or line-terminator bytes the
    /// state machine interprets itself.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(Error::configuration(format!(
                "Delimiter {:?} conflicts with quoting or line termination",
                self.delimiter
            )));
        }

        if self.column_name.trim().is_empty() {
            return Err(Error::configuration(
                "EAN column name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
