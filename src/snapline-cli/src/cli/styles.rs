//! CLI styling and formatting.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Snapline CLI styled help theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with environment variables documentation.
pub const AFTER_HELP: &str = r#"ENVIRONMENT VARIABLES
    SNAPLINE_HOME                Override install directory (default: ~/.snapline)
    SNAPLINE_CONFIG              Config file (default: ~/.snapline/config/config.toml)
    SNAPLINE_CLOUD_TOKEN         Cloud API token (alternative to --cloud-token)
    SNAPLINE_CLOUD_HOST          Cloud host (alternative to --cloud-host)
    SNAPLINE_WORKSPACE_DATABASE  Workspace database (alternative to --workspace-database)
    SNAPLINE_LOG_LEVEL           Log verbosity (error, warn, info, debug, trace)
    SNAPLINE_DIAGNOSTICS         Set to 'config' to print the resolved cloud config

EXAMPLES
    snapline check --share
    snapline check --snapshot --snapshot-location ~/snapshots --snapshot-tag env=prod
    snapline config -c cloud-host=cloud.example.com"#;
