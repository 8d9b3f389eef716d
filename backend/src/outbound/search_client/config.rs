//! Search client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::HttpUserSearchClient;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/v1/users/search";
const DEFAULT_TIMEOUT_MS: u64 = 1_000;

/// Errors raised while turning settings into a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchClientBuildError {
    #[error("invalid search endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

/// Configuration values for the search client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SEARCH_CLIENT")]
pub struct SearchClientSettings {
    /// Full URL of the search endpoint.
    pub endpoint: Option<String>,
    /// Token sent in the `AccessToken` header.
    pub access_token: Option<String>,
    /// Per-call timeout in milliseconds.
    #[ortho_config(default = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl SearchClientSettings {
    /// Return the configured endpoint, falling back to the local server.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Return the configured token; an empty token is sent when unset.
    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    /// Return the configured per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build a client from these settings.
    ///
    /// # Errors
    /// Returns [`SearchClientBuildError`] when the endpoint is not a URL or
    /// the HTTP client cannot be constructed.
    pub fn build_client(&self) -> Result<HttpUserSearchClient, SearchClientBuildError> {
        let endpoint =
            Url::parse(self.endpoint()).map_err(|err| SearchClientBuildError::InvalidEndpoint {
                endpoint: self.endpoint().to_owned(),
                message: err.to_string(),
            })?;
        HttpUserSearchClient::new(endpoint, self.access_token(), self.timeout()).map_err(|err| {
            SearchClientBuildError::Client {
                message: err.to_string(),
            }
        })
    }
}
