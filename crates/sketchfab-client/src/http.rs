//! HTTP client construction.

use reqwest::Client;
use sketchfab_types::SketchfabError;
use std::time::Duration;

const USER_AGENT: &str = concat!("sketchfab-client/", env!("CARGO_PKG_VERSION"));

/// Create the HTTP client shared by every request a `SketchfabClient` makes.
pub(crate) fn create_client(timeout_secs: u64) -> Result<Client, SketchfabError> {
    base_builder(timeout_secs).build().map_err(|e| SketchfabError::Config {
        message: format!("HTTP client builder failed: {e}"),
    })
}

/// Shared builder with keepalive settings.
fn base_builder(timeout_secs: u64) -> reqwest::ClientBuilder {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .tcp_nodelay(true)
        .http2_keep_alive_interval(Duration::from_secs(25))
        .http2_keep_alive_timeout(Duration::from_secs(10))
        .http2_keep_alive_while_idle(true)
}
