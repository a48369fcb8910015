//! Logging setup for the snapline binary.
//!
//! Logs go to stderr so stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable overriding the default log level.
pub const SNAPLINE_LOG_LEVEL_ENV: &str = "SNAPLINE_LOG_LEVEL";

const CRATES: &[&str] = &[
    "snapline",
    "snapline_cli",
    "snapline_share",
    "snapline_cloud",
    "snapline_common",
];

/// Picks the effective level: `--trace`, then `--verbose`, then
/// `SNAPLINE_LOG_LEVEL`, then `--log-level`.
pub fn effective_level(
    trace: bool,
    verbose: bool,
    env_level: Option<&str>,
    flag: LogLevel,
) -> LogLevel {
    if trace {
        LogLevel::Trace
    } else if verbose {
        LogLevel::Debug
    } else if let Some(level) = env_level.and_then(LogLevel::from_str_loose) {
        level
    } else {
        flag
    }
}

/// Builds the filter directive applying `level` to the snapline crates only.
pub fn filter_directive(level: LogLevel) -> String {
    let level = level.as_filter_str();
    let mut directive = String::from("error");
    for krate in CRATES {
        directive.push_str(&format!(",{krate}={level}"));
    }
    directive
}

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
