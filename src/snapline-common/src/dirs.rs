//! Application directories for Snapline.
//!
//! Defaults to `~/.snapline`. Can be overridden with the `SNAPLINE_HOME`
//! environment variable.

use std::path::PathBuf;

use tracing::warn;

/// Environment variable overriding the install directory.
pub const SNAPLINE_HOME_ENV: &str = "SNAPLINE_HOME";

/// Primary home directory name
pub const HOME_DIR_NAME: &str = ".snapline";

/// Application directories structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Install directory (~/.snapline)
    pub install_dir: PathBuf,
    /// Configuration directory (<install_dir>/config)
    pub config_dir: PathBuf,
}

impl AppDirs {
    /// Get application directories, respecting `SNAPLINE_HOME`.
    ///
    /// A relative `SNAPLINE_HOME` is resolved against the current directory.
    pub fn new() -> Option<Self> {
        if let Ok(home) = std::env::var(SNAPLINE_HOME_ENV)
            && !home.is_empty()
        {
            let home = PathBuf::from(&home);
            let home = if home.is_relative() {
                match std::env::current_dir() {
                    Ok(cwd) => cwd.join(&home),
                    Err(e) => {
                        warn!(
                            home = %home.display(),
                            error = %e,
                            "SNAPLINE_HOME is relative but current directory is unavailable, using default location"
                        );
                        dirs::home_dir()?.join(HOME_DIR_NAME)
                    }
                }
            } else {
                home
            };
            return Some(Self::from_install_dir(home));
        }

        Some(Self::from_install_dir(dirs::home_dir()?.join(HOME_DIR_NAME)))
    }

    fn from_install_dir(install_dir: PathBuf) -> Self {
        Self {
            config_dir: install_dir.join("config"),
            install_dir,
        }
    }

    /// Get the primary config file path (config.toml)
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
