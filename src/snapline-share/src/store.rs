//! Layered key/value configuration store.
//!
//! Layers, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML config file
//! 3. `--config KEY=VALUE` overrides
//! 4. Values set explicitly by the caller (CLI flags, resolved values)
//!
//! Every layer writes into the same table, so "later wins" is the only rule.

use std::path::{Path, PathBuf};

use snapline_cloud::DEFAULT_CLOUD_HOST;
use snapline_common::AppDirs;
use thiserror::Error;
use tracing::debug;

use crate::keys::{
    ARG_CLOUD_HOST, ARG_INSTALL_DIR, ARG_MOD_LOCATION, ARG_WORKSPACE_DATABASE,
    ARG_WORKSPACE_PROFILE, DEFAULT_WORKSPACE_DATABASE, DEFAULT_WORKSPACE_PROFILE,
};

/// Value held by a [`ConfigStore`].
pub type ConfigValue = toml::Value;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config override: {0}")]
    Override(String),
}

/// Named settings read and written for the duration of one command.
///
/// Missing keys read as `false`, `""` and `[]` respectively.
pub trait ConfigStore {
    fn get_bool(&self, name: &str) -> bool;
    fn get_string(&self, name: &str) -> String;
    fn get_string_slice(&self, name: &str) -> Vec<String>;
    fn set(&mut self, name: &str, value: ConfigValue);
}

/// [`ConfigStore`] over a flat TOML table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlConfigStore {
    values: toml::Table,
}

impl TomlConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the built-in defaults.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.set(ARG_CLOUD_HOST, DEFAULT_CLOUD_HOST.into());
        store.set(ARG_WORKSPACE_DATABASE, DEFAULT_WORKSPACE_DATABASE.into());
        store.set(ARG_WORKSPACE_PROFILE, DEFAULT_WORKSPACE_PROFILE.into());
        if let Some(dirs) = AppDirs::new() {
            store.set(
                ARG_INSTALL_DIR,
                dirs.install_dir.to_string_lossy().into_owned().into(),
            );
        }
        if let Ok(cwd) = std::env::current_dir() {
            store.set(ARG_MOD_LOCATION, cwd.to_string_lossy().into_owned().into());
        }
        store
    }

    /// Parses a store from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        Ok(Self {
            values: toml::from_str(source)?,
        })
    }

    /// Copies every top-level entry of `table` over this store.
    pub fn merge_table(&mut self, table: toml::Table) {
        for (key, value) in table {
            self.values.insert(key, value);
        }
    }

    /// Merges a TOML config file over this store.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: toml::Table =
            toml::from_str(&content).map_err(|e: toml::de::Error| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.message().to_string(),
            })?;
        debug!(path = %path.display(), keys = table.len(), "Merged config file");
        self.merge_table(table);
        Ok(())
    }

    /// Applies parsed `KEY=VALUE` overrides as string values.
    pub fn apply_overrides(&mut self, overrides: Vec<(String, String)>) {
        for (key, value) in overrides {
            debug!(%key, "Applying config override");
            self.values.insert(key, ConfigValue::String(value));
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn get_bool(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(ConfigValue::Boolean(b)) => *b,
            Some(ConfigValue::Integer(i)) => *i != 0,
            Some(ConfigValue::String(s)) => s.eq_ignore_ascii_case("true") || s == "1",
            _ => false,
        }
    }

    fn get_string(&self, name: &str) -> String {
        self.values
            .get(name)
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }

    fn get_string_slice(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(ConfigValue::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(ConfigValue::String(s)) if s.is_empty() => Vec::new(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    fn set(&mut self, name: &str, value: ConfigValue) {
        self.values.insert(name.to_string(), value);
    }
}

fn scalar_to_string(value: &ConfigValue) -> Option<String> {
    match value {
        ConfigValue::String(s) => Some(s.clone()),
        ConfigValue::Boolean(b) => Some(b.to_string()),
        ConfigValue::Integer(i) => Some(i.to_string()),
        ConfigValue::Float(f) => Some(f.to_string()),
        ConfigValue::Datetime(d) => Some(d.to_string()),
        ConfigValue::Array(_) | ConfigValue::Table(_) => None,
    }
}

/// Where to load configuration from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Explicit config file; it must exist.
    pub config_file: Option<PathBuf>,
    /// Parsed `--config` overrides.
    pub overrides: Vec<(String, String)>,
}

/// Loads defaults, the config file and overrides into one store.
///
/// Without an explicit file, `<install-dir>/config/config.toml` is merged
/// when it exists.
pub fn load_config(sources: ConfigSources) -> Result<TomlConfigStore, ConfigError> {
    let mut store = TomlConfigStore::with_defaults();

    match sources.config_file {
        Some(path) => store.merge_file(&path)?,
        None => {
            if let Some(path) = AppDirs::new().map(|dirs| dirs.config_file())
                && path.is_file()
            {
                store.merge_file(&path)?;
            }
        }
    }

    store.apply_overrides(sources.overrides);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ARG_CLOUD_TOKEN, ARG_SHARE, ARG_SNAPSHOT_LOCATION, ARG_SNAPSHOT_TAG};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_keys_read_as_empty() {
        let store = TomlConfigStore::new();
        assert!(!store.get_bool(ARG_SHARE));
        assert_eq!(store.get_string(ARG_SNAPSHOT_LOCATION), "");
        assert!(store.get_string_slice(ARG_SNAPSHOT_TAG).is_empty());
    }

    #[test]
    fn test_bool_coercion() {
        let store = TomlConfigStore::from_toml_str(
            r#"
            a = true
            b = "TRUE"
            c = "1"
            d = 0
            e = "yes"
            "#,
        )
        .unwrap();
        assert!(store.get_bool("a"));
        assert!(store.get_bool("b"));
        assert!(store.get_bool("c"));
        assert!(!store.get_bool("d"));
        assert!(!store.get_bool("e"));
    }

    #[test]
    fn test_string_and_slice_coercion() {
        let store = TomlConfigStore::from_toml_str(
            r#"
            port = 9193
            snapshot-tag = ["env=prod", "team=x"]
            single = "env=prod"
            empty = ""
            "#,
        )
        .unwrap();
        assert_eq!(store.get_string("port"), "9193");
        assert_eq!(store.get_string(ARG_SNAPSHOT_TAG), "");
        assert_eq!(
            store.get_string_slice(ARG_SNAPSHOT_TAG),
            vec!["env=prod".to_string(), "team=x".to_string()]
        );
        assert_eq!(store.get_string_slice("single"), vec!["env=prod".to_string()]);
        assert!(store.get_string_slice("empty").is_empty());
    }

    #[test]
    fn test_defaults() {
        let store = TomlConfigStore::with_defaults();
        assert_eq!(store.get_string(ARG_CLOUD_HOST), DEFAULT_CLOUD_HOST);
        assert_eq!(
            store.get_string(ARG_WORKSPACE_DATABASE),
            DEFAULT_WORKSPACE_DATABASE
        );
    }

    #[test]
    fn test_layer_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "cloud-host = \"file.example.com\"\nsnapshot-location = \"~/snaps\"\n",
        )
        .unwrap();

        let store = load_config(ConfigSources {
            config_file: Some(path),
            overrides: vec![(
                ARG_CLOUD_HOST.to_string(),
                "override.example.com".to_string(),
            )],
        })
        .unwrap();

        assert_eq!(store.get_string(ARG_CLOUD_HOST), "override.example.com");
        assert_eq!(store.get_string(ARG_SNAPSHOT_LOCATION), "~/snaps");
        assert_eq!(
            store.get_string(ARG_WORKSPACE_DATABASE),
            DEFAULT_WORKSPACE_DATABASE
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(ConfigSources {
            config_file: Some(temp_dir.path().join("missing.toml")),
            overrides: Vec::new(),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "cloud-host = ").unwrap();

        let err = TomlConfigStore::new().merge_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = TomlConfigStore::new();
        store.set(ARG_SNAPSHOT_LOCATION, "~/snaps".into());
        store.set(ARG_SNAPSHOT_LOCATION, "/home/u/snaps".into());
        assert_eq!(store.get_string(ARG_SNAPSHOT_LOCATION), "/home/u/snaps");
    }

    #[test]
    fn test_overrides_keep_text_verbatim() {
        let mut store = TomlConfigStore::new();
        store.apply_overrides(vec![
            (ARG_CLOUD_TOKEN.to_string(), "000123".to_string()),
            (ARG_SNAPSHOT_LOCATION.to_string(), "Infinity".to_string()),
            ("workspace".to_string(), "nan".to_string()),
        ]);

        assert_eq!(store.get_string(ARG_CLOUD_TOKEN), "000123");
        assert_eq!(store.get_string(ARG_SNAPSHOT_LOCATION), "Infinity");
        assert_eq!(store.get_string("workspace"), "nan");
    }

    #[test]
    fn test_override_strings_coerce_to_bool() {
        let mut store = TomlConfigStore::new();
        store.apply_overrides(vec![
            (ARG_SHARE.to_string(), "TRUE".to_string()),
            ("snapshot".to_string(), "1".to_string()),
            ("other".to_string(), "false".to_string()),
        ]);

        assert!(store.get_bool(ARG_SHARE));
        assert!(store.get_bool("snapshot"));
        assert!(!store.get_bool("other"));
    }

    #[test]
    fn test_override_tag_reads_as_single_element() {
        let mut store = TomlConfigStore::new();
        store.apply_overrides(vec![(ARG_SNAPSHOT_TAG.to_string(), "env=prod".to_string())]);
        assert_eq!(store.get_string_slice(ARG_SNAPSHOT_TAG), vec!["env=prod".to_string()]);
    }
}
