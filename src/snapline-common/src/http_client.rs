//! Centralized HTTP client factory for Snapline cloud services.
//!
//! All clients include a User-Agent and a bounded timeout. Requests are
//! blocking: cloud lookups happen once per command invocation on the main
//! thread.

use std::time::Duration;

use reqwest::blocking::Client;

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("snapline-cli/", env!("CARGO_PKG_VERSION"));

/// Default timeout for standard API requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates a blocking HTTP client with default configuration (30s timeout).
///
/// # Example
/// ```ignore
/// let client = create_blocking_client().expect("HTTP client");
/// let resp = client.get("https://cloud.snapline.io/api/v0/actor").send();
/// ```
pub fn create_blocking_client() -> Result<Client, String> {
    create_blocking_client_with_timeout(DEFAULT_TIMEOUT)
}

/// Creates a blocking HTTP client with custom timeout.
pub fn create_blocking_client_with_timeout(timeout: Duration) -> Result<Client, String> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .tcp_nodelay(true)
        .build()
        .map_err(|e| format!("Failed to build blocking HTTP client: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_blocking_client_succeeds() {
        let result = create_blocking_client();
        assert!(result.is_ok(), "create_blocking_client should succeed");
    }

    #[test]
    fn test_create_blocking_client_with_timeout_succeeds() {
        let result = create_blocking_client_with_timeout(Duration::from_secs(5));
        assert!(
            result.is_ok(),
            "create_blocking_client_with_timeout should succeed"
        );
    }

    #[test]
    fn test_user_agent_constant_is_set() {
        assert!(USER_AGENT.starts_with("snapline-cli/"));
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    }
}
