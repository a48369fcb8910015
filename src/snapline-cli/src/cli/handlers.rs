//! Command dispatch and execution handlers.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use snapline_cloud::is_cloud_workspace_identifier;
use snapline_common::CliConfigOverrides;
use snapline_share::{
    CloudArgs, ConfigError, ConfigSources, ConfigStore, ShareMode, SnapshotTag, TomlConfigStore,
    config_diagnostics_enabled, load_config, parse_snapshot_tags, render_config,
    validate_cloud_args,
};
use tracing::debug;

use super::args::{CheckArgs, Cli, CloudFlags, Commands};

/// Where a resolved snapshot goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Cloud,
    Local,
}

/// Outcome of a successful `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub mode: ShareMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    pub tags: Vec<SnapshotTag>,
}

impl CheckReport {
    /// Reads the report from a store that already passed validation.
    pub fn from_store(store: &dyn ConfigStore) -> Result<Self> {
        let args = CloudArgs::from_store(store);
        let mode = args.mode()?;
        if mode == ShareMode::Off {
            return Ok(Self {
                mode,
                snapshot_location: None,
                destination: None,
                tags: Vec::new(),
            });
        }

        let destination = if is_cloud_workspace_identifier(&args.snapshot_location) {
            Destination::Cloud
        } else {
            Destination::Local
        };
        Ok(Self {
            mode,
            snapshot_location: Some(args.snapshot_location),
            destination: Some(destination),
            tags: parse_snapshot_tags(&args.snapshot_tags)?,
        })
    }

    /// Human-readable summary.
    pub fn render(&self) -> String {
        let (Some(location), Some(destination)) = (&self.snapshot_location, self.destination)
        else {
            return "Nothing to share: neither --share nor --snapshot is set".to_string();
        };

        let action = match self.mode {
            ShareMode::Share => "Sharing",
            _ => "Saving",
        };
        let target = match destination {
            Destination::Cloud => "cloud workspace",
            Destination::Local => "local directory",
        };
        let mut out = format!("{action} snapshot to {target} {location}");
        if !self.tags.is_empty() {
            let tags: Vec<String> = self
                .tags
                .iter()
                .map(|t| format!("{}={}", t.key, t.value))
                .collect();
            out.push_str(&format!("\nTags: {}", tags.join(", ")));
        }
        out
    }
}

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let mut store = load_store(cli.config_file, &cli.config_overrides)?;
    match cli.command {
        Commands::Check(args) => run_check(&mut store, args),
        Commands::Config(flags) => run_config(&mut store, &flags),
    }
}

fn load_store(
    config_file: Option<PathBuf>,
    overrides: &CliConfigOverrides,
) -> Result<TomlConfigStore> {
    let overrides = overrides
        .parse_overrides()
        .map_err(ConfigError::Override)?;
    let store = load_config(ConfigSources {
        config_file,
        overrides,
    })?;
    debug!("Configuration loaded");
    Ok(store)
}

fn run_check(store: &mut TomlConfigStore, args: CheckArgs) -> Result<()> {
    args.flags.apply(store);

    let result = validate_cloud_args(store);
    if config_diagnostics_enabled() {
        println!("{}", render_config(store));
    }
    result?;

    let report = CheckReport::from_store(store)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

fn run_config(store: &mut TomlConfigStore, flags: &CloudFlags) -> Result<()> {
    flags.apply(store);
    println!("{}", render_config(store));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_for_no_mode() {
        let store = TomlConfigStore::new();
        let report = CheckReport::from_store(&store).unwrap();
        assert_eq!(report.mode, ShareMode::Off);
        assert!(report.render().starts_with("Nothing to share"));
    }

    #[test]
    fn test_report_for_cloud_share() {
        let store = TomlConfigStore::from_toml_str(
            r#"
            share = true
            snapshot-location = "acme/prod"
            snapshot-tag = ["env=prod", "team=x"]
            "#,
        )
        .unwrap();

        let report = CheckReport::from_store(&store).unwrap();
        assert_eq!(report.destination, Some(Destination::Cloud));
        assert_eq!(
            report.render(),
            "Sharing snapshot to cloud workspace acme/prod\nTags: env=prod, team=x"
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "share");
        assert_eq!(json["destination"], "cloud");
        assert_eq!(json["tags"][1]["key"], "team");
    }

    #[test]
    fn test_report_for_local_snapshot() {
        let store = TomlConfigStore::from_toml_str(
            r#"
            snapshot = true
            snapshot-location = "/home/u/snaps"
            "#,
        )
        .unwrap();

        let report = CheckReport::from_store(&store).unwrap();
        assert_eq!(
            report.render(),
            "Saving snapshot to local directory /home/u/snaps"
        );
    }
}
