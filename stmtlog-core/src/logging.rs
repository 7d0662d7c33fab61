use crate::sink::SQL_TARGET;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Directive used when `RUST_LOG` is unset.
///
/// Statement lines are let through at every level so the configured
/// `statement_log.level` alone decides their severity.
fn default_directive() -> String {
    format!("info,{SQL_TARGET}=trace")
}

/// Initialize the logging system with environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses environment variables for log level filtering (see `default_directive`)
/// - Configures JSON output (flattened event fields) or human-readable output
pub fn init_logging(mode: LogMode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    match mode {
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt().with_env_filter(filter).with_target(false).init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
