//! Snapshot tag parsing.

use serde::Serialize;

use crate::error::ValidationError;

/// A `key=value` snapshot tag. Neither side is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotTag {
    pub key: String,
    pub value: String,
}

/// Parses one raw tag; it must contain exactly one `=`.
pub fn parse_snapshot_tag(raw: &str) -> Result<SnapshotTag, ValidationError> {
    let parts: Vec<&str> = raw.split('=').collect();
    match parts.as_slice() {
        [key, value] => Ok(SnapshotTag {
            key: (*key).to_string(),
            value: (*value).to_string(),
        }),
        _ => Err(ValidationError::InvalidTagFormat {
            tag: raw.to_string(),
        }),
    }
}

/// Parses raw tags in order, stopping at the first invalid one.
pub fn parse_snapshot_tags(raw: &[String]) -> Result<Vec<SnapshotTag>, ValidationError> {
    raw.iter().map(|tag| parse_snapshot_tag(tag)).collect()
}
