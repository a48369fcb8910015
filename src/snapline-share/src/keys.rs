//! Stable configuration key names.
//!
//! The same names are used for CLI flags, config file entries and `--config`
//! overrides.

/// Share the snapshot to the cloud.
pub const ARG_SHARE: &str = "share";
/// Save the snapshot to the snapshot location.
pub const ARG_SNAPSHOT: &str = "snapshot";
pub const ARG_CLOUD_TOKEN: &str = "cloud-token";
pub const ARG_CLOUD_HOST: &str = "cloud-host";
pub const ARG_WORKSPACE_DATABASE: &str = "workspace-database";
/// Cloud workspace handle or local directory receiving snapshots.
pub const ARG_SNAPSHOT_LOCATION: &str = "snapshot-location";
/// Repeatable `key=value` snapshot tag.
pub const ARG_SNAPSHOT_TAG: &str = "snapshot-tag";

// Only shown by the config diagnostics.
pub const ARG_INSTALL_DIR: &str = "install-dir";
pub const ARG_MOD_LOCATION: &str = "mod-location";
pub const ARG_WORKSPACE_PROFILE: &str = "workspace";

/// Default workspace database: the local service.
pub const DEFAULT_WORKSPACE_DATABASE: &str = "local";

/// Default workspace profile name.
pub const DEFAULT_WORKSPACE_PROFILE: &str = "default";
