//! Backend client error types.

use solarheat_domain::error::SolarHeatError;

/// Errors specific to the reqwest backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Transport failure (connect, TLS, timeout, body read).
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status code.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON document.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<HttpClientError> for SolarHeatError {
    fn from(err: HttpClientError) -> Self {
        SolarHeatError::Backend(Box::new(err))
    }
}
