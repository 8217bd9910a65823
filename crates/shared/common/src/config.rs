//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{
    DEFAULT_API_BASE_URL, DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_PORT, DEFAULT_FRONTEND_ORIGIN,
};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BACKEND_HOST.to_string(),
            port: DEFAULT_BACKEND_PORT,
        }
    }
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Origin allowed to call the API
    pub allowed_origin: String,
    /// Preflight cache lifetime in seconds
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            max_age_seconds: 3600,
        }
    }
}

/// HTTP client connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
        }
    }
}
