//! Path utilities for resolving user-supplied locations.
//!
//! This module provides utilities for:
//! - Normalizing paths (resolving `.` and `..` components)
//! - Expanding home directory (`~`)
//! - Turning a user-supplied location into an absolute path ("tildefy")
//! - Checking whether a directory exists
//!
//! The [`PathResolver`] trait is the seam used by the snapshot location
//! resolution; [`FsPathResolver`] is the real filesystem implementation.
//!
//! # Examples
//!
//! ```rust,ignore
//! use snapline_common::path_utils::*;
//! use std::path::Path;
//!
//! // Normalize a path
//! let normalized = normalize_path(Path::new("/a/b/../c"));
//! assert_eq!(normalized, std::path::PathBuf::from("/a/c"));
//!
//! // Expand home directory and make absolute
//! let resolved = tildefy("~/snapshots")?;
//! // Returns something like /home/user/snapshots
//! ```

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::trace;

/// Errors that can occur during path operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The home directory could not be determined.
    #[error("Failed to expand '{path}': could not determine home directory")]
    HomeDirUnavailable { path: String },
    /// The current directory could not be determined.
    #[error("Failed to resolve '{path}': {reason}")]
    CurrentDirUnavailable { path: String, reason: String },
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Local path normalization and existence checks.
pub trait PathResolver: Send + Sync {
    /// Expands a leading home-directory shorthand and returns an absolute path.
    fn tildefy(&self, path: &str) -> PathResult<String>;

    /// Returns true if `path` names an existing directory.
    fn directory_exists(&self, path: &str) -> bool;
}

/// [`PathResolver`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathResolver;

impl PathResolver for FsPathResolver {
    fn tildefy(&self, path: &str) -> PathResult<String> {
        tildefy(path)
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }
}

/// Normalizes a path by resolving `.` and `..` components without filesystem access.
///
/// This function:
/// - Removes `.` (current directory) components
/// - Resolves `..` (parent directory) components
/// - Does NOT access the filesystem
/// - Works with both absolute and relative paths
///
/// # Examples
/// ```rust,ignore
/// use snapline_common::path_utils::normalize_path;
/// use std::path::Path;
///
/// let path = Path::new("/a/b/../c/./d");
/// let normalized = normalize_path(path);
/// assert_eq!(normalized, std::path::PathBuf::from("/a/c/d"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // Don't go above root
                if !normalized.pop() && !path.is_absolute() {
                    normalized.push("..");
                }
            }
            Component::CurDir => {}
            _ => {
                normalized.push(component);
            }
        }
    }

    normalized
}

/// Expands the home directory (`~`) in a path.
///
/// - Replaces `~` at the start of a path with the user's home directory
/// - Returns the path unchanged if it doesn't start with `~`
/// - Returns an error if home directory cannot be determined
pub fn expand_home_path(path: &Path) -> PathResult<PathBuf> {
    expand_home_with(path, dirs::home_dir().as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> PathResult<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home.ok_or_else(|| PathError::HomeDirUnavailable {
        path: path.display().to_string(),
    })?;

    if path_str == "~" {
        Ok(home.to_path_buf())
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        // ~user/something is not supported, return as-is
        Ok(path.to_path_buf())
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&cwd.join(path))
    }
}

/// Expands a leading `~` and returns the absolute, normalized form of `path`.
///
/// Relative paths are resolved against the current working directory.
pub fn tildefy(path: &str) -> PathResult<String> {
    let expanded = expand_home_path(Path::new(path))?;
    let absolute = if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        let cwd = std::env::current_dir().map_err(|e| PathError::CurrentDirUnavailable {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        absolutize(&expanded, &cwd)
    };

    let resolved = absolute.to_string_lossy().into_owned();
    trace!(input = %path, resolved = %resolved, "Tildefied path");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    #[cfg_attr(windows, ignore = "Unix path format not applicable on Windows")]
    fn test_normalize_path_simple() {
        let path = Path::new("/a/b/../c");
        assert_eq!(normalize_path(path), PathBuf::from("/a/c"));
    }

    #[test]
    #[cfg_attr(windows, ignore = "Unix path format not applicable on Windows")]
    fn test_normalize_path_mixed() {
        let path = Path::new("/a/./b/../c/./d/../e");
        assert_eq!(normalize_path(path), PathBuf::from("/a/c/e"));
    }

    #[test]
    fn test_normalize_path_relative_parent() {
        let path = Path::new("a/b/../../c");
        assert_eq!(normalize_path(path), PathBuf::from("c"));
    }

    #[test]
    fn test_expand_home_path_no_tilde() {
        let path = Path::new("/data/snapshots");
        let expanded = expand_home_with(path, Some(Path::new("/home/u"))).unwrap();
        assert_eq!(expanded, PathBuf::from("/data/snapshots"));
    }

    #[test]
    #[cfg_attr(windows, ignore = "Unix path format not applicable on Windows")]
    fn test_expand_home_path_with_tilde() {
        let expanded = expand_home_with(Path::new("~/snaps"), Some(Path::new("/home/u"))).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/u/snaps"));
    }

    #[test]
    fn test_expand_home_path_tilde_only() {
        let expanded = expand_home_with(Path::new("~"), Some(Path::new("/home/u"))).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/u"));
    }

    #[test]
    fn test_expand_home_path_tilde_in_middle() {
        let path = Path::new("/home/test~user/.snapline");
        let expanded = expand_home_with(path, Some(Path::new("/home/u"))).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/test~user/.snapline"));
    }

    #[test]
    fn test_expand_home_path_without_home_dir() {
        let err = expand_home_with(Path::new("~/snaps"), None).unwrap_err();
        assert_eq!(
            err,
            PathError::HomeDirUnavailable {
                path: "~/snaps".to_string()
            }
        );
    }

    #[test]
    fn test_expand_home_path_real_home() {
        let expanded = expand_home_path(Path::new("~/documents")).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(expanded, home.join("documents"));
    }

    #[test]
    #[cfg_attr(windows, ignore = "Unix path format not applicable on Windows")]
    fn test_absolutize_relative() {
        let resolved = absolutize(Path::new("./out/../snaps"), Path::new("/work"));
        assert_eq!(resolved, PathBuf::from("/work/snaps"));
    }

    #[test]
    fn test_tildefy_absolute_is_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_string_lossy().into_owned();
        assert_eq!(tildefy(&path).unwrap(), path);
    }

    #[test]
    fn test_tildefy_relative_becomes_absolute() {
        let resolved = tildefy("snaps").unwrap();
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("snaps"));
    }

    #[test]
    fn test_fs_resolver_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let resolver = FsPathResolver;
        assert!(resolver.directory_exists(&temp_dir.path().to_string_lossy()));
        assert!(!resolver.directory_exists(&file.to_string_lossy()));
        assert!(!resolver.directory_exists(&temp_dir.path().join("missing").to_string_lossy()));
    }
}
