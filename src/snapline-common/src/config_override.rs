//! Configuration override helpers for CLI.

/// CLI configuration overrides using raw key=value strings.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct CliConfigOverrides {
    /// Configuration overrides in the form key=value.
    #[cfg_attr(
        feature = "cli",
        arg(short = 'c', long = "config", value_name = "KEY=VALUE")
    )]
    pub raw_overrides: Vec<String>,
}

impl CliConfigOverrides {
    /// Parse the raw overrides into key-value pairs.
    ///
    /// Only the first `=` separates key from value, so values may contain `=`.
    /// Values are kept verbatim; readers coerce them on lookup.
    pub fn parse_overrides(&self) -> Result<Vec<(String, String)>, String> {
        let mut result = Vec::new();
        for raw in &self.raw_overrides {
            let Some((key, value)) = raw.split_once('=') else {
                return Err(format!(
                    "Invalid override format: {raw}. Expected KEY=VALUE"
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("Invalid override format: {raw}. Key is empty"));
            }
            result.push((key.to_string(), value.trim().to_string()));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(raw: &[&str]) -> CliConfigOverrides {
        CliConfigOverrides {
            raw_overrides: raw.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_parse_overrides() {
        let parsed = overrides(&["share=true", " cloud-host = cloud.example.com "])
            .parse_overrides()
            .unwrap();
        assert_eq!(
            parsed,
            vec![pair("share", "true"), pair("cloud-host", "cloud.example.com")]
        );
    }

    #[test]
    fn test_values_are_not_retyped() {
        let parsed = overrides(&["cloud-token=000123", "snapshot-location=Infinity", "x=nan"])
            .parse_overrides()
            .unwrap();
        assert_eq!(
            parsed,
            vec![
                pair("cloud-token", "000123"),
                pair("snapshot-location", "Infinity"),
                pair("x", "nan"),
            ]
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let parsed = overrides(&["snapshot-tag=env=prod"]).parse_overrides().unwrap();
        assert_eq!(parsed, vec![pair("snapshot-tag", "env=prod")]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let parsed = overrides(&["cloud-host="]).parse_overrides().unwrap();
        assert_eq!(parsed, vec![pair("cloud-host", "")]);
    }

    #[test]
    fn test_missing_equals_is_rejected() {
        let err = overrides(&["share"]).parse_overrides().unwrap_err();
        assert!(err.contains("Expected KEY=VALUE"));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = overrides(&["=x"]).parse_overrides().unwrap_err();
        assert!(err.contains("Key is empty"));
    }
}
