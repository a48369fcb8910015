//! Config diagnostics, enabled with `SNAPLINE_DIAGNOSTICS=config`.

use std::fmt::Write;

use crate::keys::{
    ARG_CLOUD_HOST, ARG_CLOUD_TOKEN, ARG_INSTALL_DIR, ARG_MOD_LOCATION, ARG_SNAPSHOT_LOCATION,
    ARG_WORKSPACE_DATABASE, ARG_WORKSPACE_PROFILE,
};
use crate::store::ConfigStore;

/// Environment variable selecting a diagnostics mode.
pub const SNAPLINE_DIAGNOSTICS_ENV: &str = "SNAPLINE_DIAGNOSTICS";

const DIAGNOSTIC_KEYS: &[&str] = &[
    ARG_INSTALL_DIR,
    ARG_MOD_LOCATION,
    ARG_SNAPSHOT_LOCATION,
    ARG_WORKSPACE_PROFILE,
    ARG_WORKSPACE_DATABASE,
    ARG_CLOUD_HOST,
    ARG_CLOUD_TOKEN,
];

/// Returns true if `SNAPLINE_DIAGNOSTICS` asks for the config dump.
pub fn config_diagnostics_enabled() -> bool {
    is_config_mode(std::env::var(SNAPLINE_DIAGNOSTICS_ENV).ok().as_deref())
}

fn is_config_mode(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("config"))
}

/// Masks all but the last four characters of a token.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let visible: String = token.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), visible)
}

/// Renders the cloud-related config values, one aligned line per key.
pub fn render_config(store: &dyn ConfigStore) -> String {
    let width = DIAGNOSTIC_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);

    let mut out = String::from("\n=================\nSnapline Config\n=================\n\n");
    for key in DIAGNOSTIC_KEYS {
        let mut value = store.get_string(key);
        if *key == ARG_CLOUD_TOKEN {
            value = mask_token(&value);
        }
        let _ = writeln!(out, "{key:<width$}: {value}");
    }
    out
}
