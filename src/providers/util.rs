use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// Builds the HTTP client shared by all rate endpoints.
///
/// Every request made through it is bounded by `timeout`, covering connect,
/// headers and body.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client> {
    debug!(user_agent, ?timeout, "Building HTTP client");
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}
