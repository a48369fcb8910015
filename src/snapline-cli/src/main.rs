//! Snapline CLI - Main entry point.
//!
//! - `check` resolves the snapshot sharing settings and reports the destination
//! - `config` prints the cloud-related configuration

use clap::Parser;

use snapline_cli::cli::{Cli, dispatch_command};
use snapline_cli::exit_codes::ExitCode;
use snapline_cli::logging::{SNAPLINE_LOG_LEVEL_ENV, effective_level, init_logging};

fn main() {
    let cli = Cli::parse();

    let env_level = std::env::var(SNAPLINE_LOG_LEVEL_ENV).ok();
    init_logging(effective_level(
        cli.trace,
        cli.verbose,
        env_level.as_deref(),
        cli.log_level,
    ));

    if let Err(err) = dispatch_command(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(ExitCode::for_error(&err).as_i32());
    }
}
