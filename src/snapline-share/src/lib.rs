//! Snapshot sharing configuration for Snapline.
//!
//! Decides whether a result snapshot is shared to the cloud or saved
//! locally, resolves where it goes and checks the tags attached to it.

pub mod args;
pub mod diagnostics;
pub mod error;
pub mod keys;
pub mod store;
pub mod tags;
pub mod validate;

pub use args::{CloudArgs, ShareMode};
pub use diagnostics::{config_diagnostics_enabled, mask_token, render_config};
pub use error::{CollaboratorError, ValidationError};
pub use store::{ConfigError, ConfigSources, ConfigStore, ConfigValue, TomlConfigStore, load_config};
pub use tags::{SnapshotTag, parse_snapshot_tag, parse_snapshot_tags};
pub use validate::{
    CloudArgValidator, LocationState, commit_snapshot_location, validate_cloud_args,
};
