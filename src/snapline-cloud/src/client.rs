//! Cloud API client.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use snapline_common::create_blocking_client;
use tracing::{debug, info};

use crate::workspace::workspace_handle;
use crate::{API_PREFIX, CloudError, Result};

/// Remote lookups needed to resolve snapshot destinations.
pub trait CloudClient: Send + Sync {
    /// Returns the default workspace handle of the user owning `token`.
    fn get_user_workspace(&self, token: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct Actor {
    handle: String,
}

#[derive(Debug, Deserialize)]
struct Workspace {
    handle: String,
}

#[derive(Debug, Default, Deserialize)]
struct WorkspaceList {
    #[serde(default)]
    items: Vec<Workspace>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Blocking HTTP client for the cloud API.
pub struct HttpCloudClient {
    host: String,
    client: Client,
}

impl HttpCloudClient {
    /// Creates a client for `host`.
    ///
    /// A bare host name is reached over HTTPS; a host that already carries a
    /// scheme is used as-is.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let client = create_blocking_client().map_err(CloudError::Client)?;
        Ok(Self {
            host: host.into(),
            client,
        })
    }

    /// Base URL of the versioned API.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            format!("{host}{API_PREFIX}")
        } else {
            format!("https://{host}{API_PREFIX}")
        }
    }

    /// API URL for `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url())
            .map_err(|e| CloudError::Client(format!("invalid cloud host {}: {e}", self.host)))?;
        url.path_segments_mut()
            .map_err(|()| CloudError::Client(format!("invalid cloud host {}", self.host)))?
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, token: &str, url: Url) -> Result<T> {
        debug!(%url, "Cloud API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .map_err(|e| CloudError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CloudError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let message = parsed.detail.or(parsed.message).unwrap_or(body);
            return Err(CloudError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .map_err(|e| CloudError::InvalidResponse(e.to_string()))
    }
}

impl CloudClient for HttpCloudClient {
    fn get_user_workspace(&self, token: &str) -> Result<String> {
        let actor: Actor = self.get_json(token, self.endpoint(&["actor"])?)?;
        let user = actor.handle;

        let workspaces: WorkspaceList =
            self.get_json(token, self.endpoint(&["user", user.as_str(), "workspace"])?)?;

        match workspaces.items.as_slice() {
            [] => Err(CloudError::NoWorkspaces { user }),
            [workspace] => {
                let handle = workspace_handle(&user, &workspace.handle);
                info!(workspace = %handle, "Resolved default cloud workspace");
                Ok(handle)
            }
            _ => Err(CloudError::AmbiguousWorkspace { user }),
        }
    }
}
