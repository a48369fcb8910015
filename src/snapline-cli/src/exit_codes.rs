//! Exit codes for the snapline CLI.
//!
//! Exit codes communicate which rule failed without requiring output parsing.

use snapline_share::ValidationError;

/// Exit codes for snapline operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Config file or override could not be loaded, or an unexpected error
    GeneralError = 1,

    /// Contradictory or malformed arguments (modes, tags)
    UsageError = 2,

    /// Cloud token or host missing
    MissingCredentials = 3,

    /// Local snapshot location does not exist
    LocationNotFound = 4,

    /// Cloud API or filesystem failure
    CollaboratorError = 5,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a validation failure to its exit code.
    pub fn for_validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::ConflictingModes | ValidationError::InvalidTagFormat { .. } => {
                ExitCode::UsageError
            }
            ValidationError::MissingCloudToken | ValidationError::MissingCloudHost => {
                ExitCode::MissingCredentials
            }
            ValidationError::SnapshotLocationNotFound { .. } => ExitCode::LocationNotFound,
            ValidationError::Collaborator(_) => ExitCode::CollaboratorError,
        }
    }

    /// Maps any command error to its exit code.
    pub fn for_error(err: &anyhow::Error) -> Self {
        err.downcast_ref::<ValidationError>()
            .map_or(ExitCode::GeneralError, Self::for_validation)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
