//! Snapshot of the cloud-related settings read from a [`ConfigStore`].

use serde::Serialize;

use crate::error::ValidationError;
use crate::keys::{
    ARG_CLOUD_HOST, ARG_CLOUD_TOKEN, ARG_SHARE, ARG_SNAPSHOT, ARG_SNAPSHOT_LOCATION,
    ARG_SNAPSHOT_TAG, ARG_WORKSPACE_DATABASE,
};
use crate::store::ConfigStore;

/// What to do with the result snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMode {
    /// Neither sharing nor saving was requested.
    Off,
    /// Upload and share the snapshot.
    Share,
    /// Save the snapshot to the snapshot location.
    Snapshot,
}

/// Cloud-related settings, read once per validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudArgs {
    pub share: bool,
    pub snapshot: bool,
    pub cloud_token: String,
    pub cloud_host: String,
    pub workspace_database: String,
    pub snapshot_location: String,
    pub snapshot_tags: Vec<String>,
}

impl CloudArgs {
    pub fn from_store(store: &dyn ConfigStore) -> Self {
        Self {
            share: store.get_bool(ARG_SHARE),
            snapshot: store.get_bool(ARG_SNAPSHOT),
            cloud_token: store.get_string(ARG_CLOUD_TOKEN),
            cloud_host: store.get_string(ARG_CLOUD_HOST),
            workspace_database: store.get_string(ARG_WORKSPACE_DATABASE),
            snapshot_location: store.get_string(ARG_SNAPSHOT_LOCATION),
            snapshot_tags: store.get_string_slice(ARG_SNAPSHOT_TAG),
        }
    }

    /// Derives the share mode; both flags set is a conflict.
    pub fn mode(&self) -> Result<ShareMode, ValidationError> {
        match (self.share, self.snapshot) {
            (true, true) => Err(ValidationError::ConflictingModes),
            (true, false) => Ok(ShareMode::Share),
            (false, true) => Ok(ShareMode::Snapshot),
            (false, false) => Ok(ShareMode::Off),
        }
    }
}
