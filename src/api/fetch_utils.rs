//! Generic HTTP fetching and response decoding.
//!
//! One dispatch step classifies every response exactly once, keyed purely on
//! the HTTP status: a 2xx body to decode, a 404 absence, or a failure. The
//! typed consumers below give the absence its endpoint-appropriate shape:
//! `None` for a single optional resource, an empty `Vec` for a collection, and
//! an error for endpoints where the resource always exists.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::error::ApiError;

/// Outcome of one dispatched request.
enum Fetched {
    Body(String),
    Absent,
}

async fn dispatch(client: &Client, url: &str) -> Result<Fetched, ApiError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {url}: {e}");
            return if e.is_timeout() {
                Err(ApiError::network_timeout(url))
            } else if e.is_connect() {
                Err(ApiError::network_connection(url, e.to_string()))
            } else {
                Err(ApiError::Http(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if status.as_u16() == 404 {
        debug!("Resource not found at {url}");
        return Ok(Fetched::Absent);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("HTTP {} (URL: {url})", status.as_u16());
        return Err(ApiError::unexpected_status(status.as_u16(), body, url));
    }

    let body = response.text().await.map_err(ApiError::Http)?;
    debug!("Response length: {} bytes", body.len());
    Ok(Fetched::Body(body))
}

fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {e} (URL: {url})");

            if body.trim().is_empty() {
                Err(ApiError::no_data("Response body is empty", url))
            } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[') {
                Err(ApiError::malformed_json("Response is not valid JSON", url))
            } else {
                // Valid JSON but the wrong shape, including a missing or empty
                // required entity field
                Err(ApiError::unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches an endpoint whose resource always exists. A 404 here is an
/// unexpected status like any other failure.
pub(crate) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, ApiError> {
    match dispatch(client, url).await? {
        Fetched::Body(body) => decode(&body, url),
        Fetched::Absent => Err(ApiError::unexpected_status(404, String::new(), url)),
    }
}

/// Fetches a single optional resource. A 404 is the absent value, not an
/// error.
pub(crate) async fn fetch_optional<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Option<T>, ApiError> {
    match dispatch(client, url).await? {
        Fetched::Body(body) => decode(&body, url).map(Some),
        Fetched::Absent => Ok(None),
    }
}

/// Fetches a collection. A 404 is an empty collection, not an error.
pub(crate) async fn fetch_list<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Vec<T>, ApiError> {
    match dispatch(client, url).await? {
        Fetched::Body(body) => decode(&body, url),
        Fetched::Absent => Ok(Vec::new()),
    }
}
