//! Command-line argument definitions for the GTIN auditor
//!
//! This module defines the CLI interface using the clap derive API. The
//! tool is single-purpose, so the argument set is flat: stream parameters,
//! an optional input file, and verbosity control.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_EAN_COLUMN};
use crate::{Error, Result};

/// CLI arguments for the GTIN stream auditor
///
/// Reads a delimited product feed from standard input (or a file), validates
/// the EAN column of every row against the EAN-13 checksum, and prints
/// `<valid> <invalid>` on standard output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gtin-auditor",
    version,
    about = "Count valid and invalid GTIN/EAN-13 codes in a delimited stream",
    long_about = "Reads delimited text from standard input or a file, locates the column \
                  holding GTIN/EAN product codes (by header name, or by a headerless first \
                  row that starts with a valid code), validates each row against the EAN-13 \
                  checksum, and prints a single line: the valid count and the invalid count. \
                  A structurally malformed header degrades to '0 0' rather than an error."
)]
pub struct Args {
    /// Field delimiter character
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Field delimiter character"
    )]
    pub delimiter: char,

    /// Header name of the column holding EAN codes
    #[arg(
        short = 'c',
        long = "column",
        value_name = "NAME",
        default_value = DEFAULT_EAN_COLUMN,
        help = "Header name of the EAN column"
    )]
    pub column_name: String,

    /// Input file to audit instead of standard input
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Read from this file instead of standard input"
    )]
    pub input_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress diagnostics (quiet mode)
    ///
    /// Only errors are logged. The result line is printed either way.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress diagnostics except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // AuditConfig::validate re-checks the delimiter against the
        // tokenizer's constraints
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            column_name: DEFAULT_EAN_COLUMN.to_string(),
            input_path: None,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let args = Args::default();

        assert_eq!(args.delimiter, ',');
        assert_eq!(args.column_name, "ean");
        assert!(args.input_path.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_ascii_delimiter() {
        let args = Args {
            delimiter: '€',
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_checks_input_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "name,ean").unwrap();

        let args = Args {
            input_path: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        let missing = Args {
            input_path: Some(PathBuf::from("/nonexistent/feed.csv")),
            ..Default::default()
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::default();

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_parses_from_command_line() {
        let args = Args::parse_from(["gtin-auditor", "-d", ";", "-c", "gtin", "-vv"]);

        assert_eq!(args.delimiter, ';');
        assert_eq!(args.column_name, "gtin");
        assert_eq!(args.verbose, 2);
    }
}
