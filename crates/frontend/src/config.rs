//! Frontend configuration.

use std::env;

use common::HttpClientConfig;

/// Frontend configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Backend connection settings
    pub http: HttpClientConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            http: HttpClientConfig {
                base_url: env::var("API_BASE_URL").unwrap_or(defaults.base_url),
                connect_timeout_ms: env::var("CLIENT_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                request_timeout_ms: env::var("CLIENT_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.request_timeout_ms),
            },
        }
    }

    /// Point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http.base_url = base_url.into();
        self
    }
}
