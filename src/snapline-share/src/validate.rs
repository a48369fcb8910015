//! Cloud argument validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. `share` and `snapshot` are mutually exclusive
//! 2. neither set: nothing to do
//! 3. resolve the snapshot location (may write it back to the store)
//! 4. a cloud workspace database or location requires a token
//! 5. the cloud host must be set
//! 6. every snapshot tag is `key=value`
//!
//! A location written back in step 3 stays written even if a later step
//! fails.

use snapline_cloud::{CloudClient, HandleClassifier, HttpCloudClient, WorkspaceClassifier};
use snapline_common::{FsPathResolver, PathResolver};
use tracing::{debug, info, warn};

use crate::args::{CloudArgs, ShareMode};
use crate::error::ValidationError;
use crate::keys::{ARG_CLOUD_HOST, ARG_SNAPSHOT_LOCATION};
use crate::store::ConfigStore;
use crate::tags::parse_snapshot_tags;

/// Snapshot location resolution states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationState {
    /// No location configured.
    Unset,
    /// Location is a cloud workspace handle.
    CloudHandle(String),
    /// Location is a local path as configured.
    LocalPathRaw(String),
    /// Location is an absolute local path.
    LocalPathResolved(String),
    /// Resolution stopped with an error.
    Failed(ValidationError),
}

impl LocationState {
    fn name(&self) -> &'static str {
        match self {
            LocationState::Unset => "unset",
            LocationState::CloudHandle(_) => "cloud_handle",
            LocationState::LocalPathRaw(_) => "local_path_raw",
            LocationState::LocalPathResolved(_) => "local_path_resolved",
            LocationState::Failed(_) => "failed",
        }
    }
}

/// Validates and resolves cloud sharing arguments against injected collaborators.
pub struct CloudArgValidator<'a> {
    cloud: &'a dyn CloudClient,
    paths: &'a dyn PathResolver,
    classifier: &'a dyn WorkspaceClassifier,
}

impl<'a> CloudArgValidator<'a> {
    pub fn new(
        cloud: &'a dyn CloudClient,
        paths: &'a dyn PathResolver,
        classifier: &'a dyn WorkspaceClassifier,
    ) -> Self {
        Self {
            cloud,
            paths,
            classifier,
        }
    }

    /// Runs every check in order against the current store contents.
    pub fn validate(&self, store: &mut dyn ConfigStore) -> Result<(), ValidationError> {
        let args = CloudArgs::from_store(store);

        let mode = args.mode()?;
        if mode == ShareMode::Off {
            debug!("Neither share nor snapshot requested, skipping cloud validation");
            return Ok(());
        }
        debug!(?mode, "Validating cloud arguments");

        let location =
            self.resolve_snapshot_location(store, &args.snapshot_location, &args.cloud_token)?;

        let require_token = self.is_cloud(&args.workspace_database) || self.is_cloud(&location);
        if require_token && args.cloud_token.is_empty() {
            return Err(ValidationError::MissingCloudToken);
        }

        // A default host is always configured; an empty one means the defaults were overridden.
        if args.cloud_host.is_empty() {
            return Err(ValidationError::MissingCloudHost);
        }

        parse_snapshot_tags(&args.snapshot_tags)?;
        Ok(())
    }

    /// Resolves the configured snapshot location to a cloud handle or an
    /// existing absolute directory.
    pub fn resolve_snapshot_location(
        &self,
        store: &mut dyn ConfigStore,
        configured: &str,
        token: &str,
    ) -> Result<String, ValidationError> {
        let mut state = if configured.is_empty() {
            LocationState::Unset
        } else if self.is_cloud(configured) {
            LocationState::CloudHandle(configured.to_string())
        } else {
            LocationState::LocalPathRaw(configured.to_string())
        };

        loop {
            debug!(state = state.name(), "Snapshot location");
            state = match state {
                LocationState::Unset if token.is_empty() => {
                    LocationState::Failed(ValidationError::MissingCloudToken)
                }
                LocationState::Unset => match self.cloud.get_user_workspace(token) {
                    Ok(workspace) => {
                        commit_snapshot_location(store, &workspace);
                        LocationState::CloudHandle(workspace)
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to resolve default cloud workspace");
                        LocationState::Failed(e.into())
                    }
                },
                LocationState::LocalPathRaw(raw) => match self.paths.tildefy(&raw) {
                    Ok(resolved) => {
                        commit_snapshot_location(store, &resolved);
                        LocationState::LocalPathResolved(resolved)
                    }
                    Err(e) => LocationState::Failed(e.into()),
                },
                LocationState::LocalPathResolved(path) => {
                    if self.paths.directory_exists(&path) {
                        return Ok(path);
                    }
                    LocationState::Failed(ValidationError::SnapshotLocationNotFound { path })
                }
                LocationState::CloudHandle(handle) => return Ok(handle),
                LocationState::Failed(err) => return Err(err),
            };
        }
    }

    fn is_cloud(&self, value: &str) -> bool {
        self.classifier.is_cloud_workspace_identifier(value)
    }
}

/// Writes the resolved snapshot location back to the store.
pub fn commit_snapshot_location(store: &mut dyn ConfigStore, location: &str) {
    info!(location = %location, "Resolved snapshot location");
    store.set(ARG_SNAPSHOT_LOCATION, location.into());
}

/// Builds the HTTP client only when a workspace lookup is needed.
struct LazyHttpCloudClient {
    host: String,
}

impl CloudClient for LazyHttpCloudClient {
    fn get_user_workspace(&self, token: &str) -> snapline_cloud::Result<String> {
        HttpCloudClient::new(self.host.as_str())?.get_user_workspace(token)
    }
}

/// Validates `store` with the HTTP cloud client, the filesystem and the
/// default workspace handle classifier.
pub fn validate_cloud_args(store: &mut dyn ConfigStore) -> Result<(), ValidationError> {
    let cloud = LazyHttpCloudClient {
        host: store.get_string(ARG_CLOUD_HOST),
    };
    CloudArgValidator::new(&cloud, &FsPathResolver, &HandleClassifier).validate(store)
}
