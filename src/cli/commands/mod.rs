//! Command implementation for the GTIN auditor CLI
//!
//! The tool has a single workflow, implemented in [`audit`]; [`shared`]
//! holds logging setup and result reporting used by it.

pub mod audit;
pub mod shared;

use crate::Result;
use crate::app::services::stream_auditor::AuditSummary;
use crate::cli::args::Args;

/// Main command runner for the GTIN auditor
pub fn run(args: Args) -> Result<AuditSummary> {
    audit::run_audit(args)
}
