//! Cloud workspace handle classification.

/// Decides whether a configured value refers to a cloud workspace.
pub trait WorkspaceClassifier: Send + Sync {
    fn is_cloud_workspace_identifier(&self, value: &str) -> bool;
}

/// Classifies `<identity-handle>/<workspace-handle>` values as cloud workspaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleClassifier;

impl WorkspaceClassifier for HandleClassifier {
    fn is_cloud_workspace_identifier(&self, value: &str) -> bool {
        is_cloud_workspace_identifier(value)
    }
}

/// Returns true if `value` splits on `/` into exactly two handle segments.
///
/// A handle is a non-empty run of ASCII alphanumerics, `-` or `_`, so local
/// paths such as `~/snaps`, `./snaps` or `/snaps` never classify as cloud.
pub fn is_cloud_workspace_identifier(value: &str) -> bool {
    let mut segments = value.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(identity), Some(workspace), None) => is_handle(identity) && is_handle(workspace),
        _ => false,
    }
}

fn is_handle(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Builds a workspace handle from its identity and workspace parts.
pub fn workspace_handle(identity: &str, workspace: &str) -> String {
    format!("{identity}/{workspace}")
}
