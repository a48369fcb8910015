//! Snapline cloud API client.
//!
//! Resolves the default workspace of the user owning a cloud token and
//! classifies values as cloud workspace handles.

pub mod client;
pub mod workspace;

pub use client::{CloudClient, HttpCloudClient};
pub use workspace::{HandleClassifier, WorkspaceClassifier, is_cloud_workspace_identifier};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    #[error("failed to create cloud client: {0}")]
    Client(String),
    #[error("cloud request failed: {0}")]
    Network(String),
    #[error("cloud token is invalid or has expired")]
    Unauthorized,
    #[error("cloud API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid response from cloud API: {0}")]
    InvalidResponse(String),
    #[error("snapshot-location is not specified and no workspaces exist for user {user}")]
    NoWorkspaces { user: String },
    #[error(
        "more than one workspace found for user {user} - specify which one to use with '--snapshot-location'"
    )]
    AmbiguousWorkspace { user: String },
}

pub type Result<T> = std::result::Result<T, CloudError>;

/// Default cloud host.
pub const DEFAULT_CLOUD_HOST: &str = "cloud.snapline.io";

/// Path prefix of the versioned cloud API.
pub const API_PREFIX: &str = "/api/v0";
