//! Backend connection configuration.

use serde::Deserialize;

/// Default location of the controller API.
pub const DEFAULT_BASE_URL: &str = "https://solar-heat-backend.manuelselch.de";

/// Configuration for the controller backend client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the controller API, without a trailing path.
    pub url: String,
    /// Per-request timeout in seconds. No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            user_agent: concat!("solarheat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
