//! Common utilities shared across Snapline crates.

pub mod config_override;
pub mod dirs;
pub mod http_client;
pub mod path_utils;

pub use config_override::CliConfigOverrides;
pub use dirs::AppDirs;
pub use http_client::{
    DEFAULT_TIMEOUT, USER_AGENT, create_blocking_client, create_blocking_client_with_timeout,
};
pub use path_utils::{
    FsPathResolver, PathError, PathResolver, PathResult, expand_home_path, normalize_path,
    tildefy,
};
