//! Audit command implementation
//!
//! Wires the CLI arguments to the stream auditor: logging, argument and
//! configuration validation, input selection, and the final report.

use std::fs::File;
use std::io::{self, BufReader};

use tracing::{debug, info};

use super::shared::{report_summary, setup_logging};
use crate::app::services::stream_auditor::{AuditSummary, StreamAuditor};
use crate::cli::args::Args;
use crate::config::AuditConfig;
use crate::{Error, Result};

/// Run a stream audit from the parsed CLI arguments
pub fn run_audit(args: Args) -> Result<AuditSummary> {
    setup_logging(&args)?;

    info!("Starting GTIN stream audit");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = AuditConfig::default()
        .with_delimiter(args.delimiter)
        .with_column_name(args.column_name.clone());
    config.validate()?;

    let auditor = StreamAuditor::new(config);

    let summary = match &args.input_path {
        Some(path) => {
            info!("Auditing file: {}", path.display());
            let file = File::open(path).map_err(|e| {
                Error::io(format!("Failed to open input file {}", path.display()), e)
            })?;
            auditor.audit(BufReader::new(file))?
        }
        None => {
            debug!("Auditing standard input");
            let stdin = io::stdin();
            auditor.audit(stdin.lock())?
        }
    };

    report_summary(&summary);

    Ok(summary)
}
