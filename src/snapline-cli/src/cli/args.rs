//! CLI argument structures and parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use snapline_common::CliConfigOverrides;
use snapline_share::{ConfigStore, ConfigValue};
use snapline_share::keys::{
    ARG_CLOUD_HOST, ARG_CLOUD_TOKEN, ARG_SHARE, ARG_SNAPSHOT, ARG_SNAPSHOT_LOCATION,
    ARG_SNAPSHOT_TAG, ARG_WORKSPACE_DATABASE,
};

use super::styles::{AFTER_HELP, get_styles};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Snapline - resolve and check snapshot sharing settings
#[derive(Parser, Debug)]
#[command(name = "snapline")]
#[command(author, version, about = "Resolve and check snapshot sharing settings", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    #[clap(flatten)]
    pub config_overrides: CliConfigOverrides,

    /// Config file to load instead of ~/.snapline/config/config.toml
    #[arg(long = "config-file", env = "SNAPLINE_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Log verbosity
    #[arg(long = "log-level", global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and validate the snapshot sharing settings
    Check(CheckArgs),
    /// Print the cloud-related configuration without validating it
    Config(CloudFlags),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub flags: CloudFlags,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}

/// Snapshot sharing flags. Only flags given on the command line override
/// the loaded configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct CloudFlags {
    /// Share the snapshot to the cloud
    #[arg(long)]
    pub share: bool,

    /// Save the snapshot to the snapshot location
    #[arg(long)]
    pub snapshot: bool,

    /// Cloud workspace handle (identity/workspace) or local directory for snapshots
    #[arg(long = "snapshot-location", value_name = "LOCATION")]
    pub snapshot_location: Option<String>,

    /// Tag to attach to the snapshot (repeatable)
    #[arg(long = "snapshot-tag", value_name = "KEY=VALUE")]
    pub snapshot_tags: Vec<String>,

    /// Cloud API token
    #[arg(long = "cloud-token", env = "SNAPLINE_CLOUD_TOKEN", hide_env_values = true)]
    pub cloud_token: Option<String>,

    /// Cloud host
    #[arg(long = "cloud-host", env = "SNAPLINE_CLOUD_HOST")]
    pub cloud_host: Option<String>,

    /// Workspace database: `local` or a cloud workspace handle
    #[arg(long = "workspace-database", env = "SNAPLINE_WORKSPACE_DATABASE")]
    pub workspace_database: Option<String>,
}

impl CloudFlags {
    /// Writes the given flags over the loaded configuration.
    pub fn apply(&self, store: &mut dyn ConfigStore) {
        if self.share {
            store.set(ARG_SHARE, true.into());
        }
        if self.snapshot {
            store.set(ARG_SNAPSHOT, true.into());
        }
        let strings = [
            (ARG_SNAPSHOT_LOCATION, &self.snapshot_location),
            (ARG_CLOUD_TOKEN, &self.cloud_token),
            (ARG_CLOUD_HOST, &self.cloud_host),
            (ARG_WORKSPACE_DATABASE, &self.workspace_database),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                store.set(key, value.as_str().into());
            }
        }
        if !self.snapshot_tags.is_empty() {
            let tags: Vec<ConfigValue> = self
                .snapshot_tags
                .iter()
                .map(|t| t.as_str().into())
                .collect();
            store.set(ARG_SNAPSHOT_TAG, ConfigValue::Array(tags));
        }
    }
}
