//! HTTP client wrapper for the remote holiday provider.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::error::Result;

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("picoplaca/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// The timeout bounds the single outbound request of a remote lookup.
pub fn create_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Issue one GET request and return the status with the body text.
///
/// No retries: a failed lookup fails the query that needed it. Transport
/// errors are returned without their URL, which carries the API key.
pub fn get_text(
    client: &Client,
    url: Url,
) -> std::result::Result<(StatusCode, String), reqwest::Error> {
    tracing::debug!(
        host = url.host_str().unwrap_or_default(),
        path = url.path(),
        "Sending holiday lookup"
    );
    let response = client
        .get(url)
        .send()
        .map_err(reqwest::Error::without_url)?;
    let status = response.status();
    let body = response.text().map_err(reqwest::Error::without_url)?;
    tracing::debug!(status = %status, bytes = body.len(), "Holiday lookup answered");
    Ok((status, body))
}
