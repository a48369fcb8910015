//! Snapline CLI library module.
//!
//! - `cli/` - argument parsing and command dispatch
//! - `exit_codes` - process exit codes for each failure class
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod exit_codes;
pub mod logging;
