//! Outbound HTTP helpers shared by the service clients

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

use crate::errors::RelayError;

/// Builds the shared HTTP client. Request bounding relies on this timeout.
#[must_use]
pub fn build_http_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
        warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
        Client::new()
    })
}

/// Sends `request` and decodes a JSON body.
///
/// Non-2xx statuses become [`RelayError::UpstreamStatus`] and malformed bodies
/// [`RelayError::DecodeError`], both tagged with `target`. Transport errors drop
/// the request URL, which may carry access tokens in its query.
pub async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    target: &str,
) -> Result<T, RelayError> {
    let response = request
        .send()
        .await
        .map_err(|e| RelayError::from(e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::UpstreamStatus {
            target: target.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| RelayError::from(e.without_url()))?;
    serde_json::from_str(&body).map_err(|e| RelayError::DecodeError {
        target: target.to_string(),
        message: e.to_string(),
    })
}
