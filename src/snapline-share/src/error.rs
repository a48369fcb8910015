//! Validation errors.

use snapline_cloud::CloudError;
use snapline_common::PathError;
use thiserror::Error;

use crate::keys::ARG_SNAPSHOT_TAG;

/// Failure reported by a collaborator, passed through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error(transparent)]
    Cloud(#[from] CloudError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// First violated rule found while validating cloud arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("only one of 'share' and 'snapshot' may be set")]
    ConflictingModes,
    #[error(
        "a cloud token is required: set --cloud-token or the SNAPLINE_CLOUD_TOKEN environment variable"
    )]
    MissingCloudToken,
    #[error("to share snapshots, cloud host must be set")]
    MissingCloudHost,
    #[error("snapshot location {path} does not exist")]
    SnapshotLocationNotFound { path: String },
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
    #[error("snapshot tags must be specified '--{flag} key=value'", flag = ARG_SNAPSHOT_TAG)]
    InvalidTagFormat { tag: String },
}

impl From<CloudError> for ValidationError {
    fn from(err: CloudError) -> Self {
        Self::Collaborator(err.into())
    }
}

impl From<PathError> for ValidationError {
    fn from(err: PathError) -> Self {
        Self::Collaborator(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_message_names_flag() {
        let err = ValidationError::InvalidTagFormat {
            tag: "broken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "snapshot tags must be specified '--snapshot-tag key=value'"
        );
    }

    #[test]
    fn test_collaborator_error_is_verbatim() {
        let err: ValidationError = CloudError::Unauthorized.into();
        assert_eq!(err.to_string(), CloudError::Unauthorized.to_string());
    }
}
