//! HTTP client creation and configuration

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, SUBSCRIPTION_KEY_HEADER};
use crate::error::ApiError;

/// Creates the one HTTP client used for all requests. The subscription key is
/// installed as a default header here; nothing mutates the client afterwards,
/// so every request carries it.
pub(crate) fn create_http_client(api_key: &str, timeout_seconds: u64) -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    let mut key_value = HeaderValue::from_str(api_key)?;
    key_value.set_sensitive(true);
    headers.insert(SUBSCRIPTION_KEY_HEADER, key_value);

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()
        .map_err(ApiError::Http)
}
