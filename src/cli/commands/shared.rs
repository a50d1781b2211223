//! Shared components for CLI commands
//!
//! Logging setup and result reporting used by the audit workflow.

use tracing::debug;

use crate::Result;
use crate::app::services::stream_auditor::AuditSummary;
use crate::cli::args::Args;

/// Set up structured logging on stderr.
///
/// Standard output is reserved for the result line, so every diagnostic
/// goes to stderr regardless of verbosity.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gtin_auditor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the canonical result line on standard output.
///
/// Exactly one line, `<valid> <invalid>`, on success and on
/// malformed-header short-circuit alike.
pub fn report_summary(summary: &AuditSummary) {
    println!("{}", summary.render());
}
