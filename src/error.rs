use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch data from API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid subscription key header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    // Any non-2xx, non-404 status. 404 is not an error for this client: single
    // resource lookups surface it as None, collection lookups as an empty Vec.
    #[error("API returned unexpected status ({status}): {body} (URL: {url})")]
    UnexpectedStatus {
        status: u16,
        body: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Response body decode errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    MalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    UnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    NoData { message: String, url: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),
}

impl ApiError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create an unexpected status error carrying the response body for diagnostics
    pub fn unexpected_status(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if error indicates the response body could not be decoded into the
    /// declared shape (as opposed to transport or status-level failures)
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            ApiError::MalformedJson { .. }
                | ApiError::UnexpectedStructure { .. }
                | ApiError::NoData { .. }
        )
    }
}
