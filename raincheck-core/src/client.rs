//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

/// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("raincheck/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the client every service in this crate talks through.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .build()
}
