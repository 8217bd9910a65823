//! Backend configuration.

use std::env;

use common::{CorsConfig, ServiceConfig};
use domain::{DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_PORT, DEFAULT_FRONTEND_ORIGIN};

/// Backend configuration.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    /// Bind address and logging settings
    pub service: ServiceConfig,
    /// Cross-origin settings for the frontend
    pub cors: CorsConfig,
}

impl BackendConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service: ServiceConfig {
                host: env::var("BACKEND_HOST")
                    .unwrap_or_else(|_| DEFAULT_BACKEND_HOST.to_string()),
                port: env::var("BACKEND_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_BACKEND_PORT),
            },
            cors: CorsConfig {
                allowed_origin: env::var("FRONTEND_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()),
                max_age_seconds: env::var("CORS_MAX_AGE_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.cors.max_age_seconds),
            },
        }
    }

    /// Override host and/or port; `None` keeps the current value.
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }

    /// Override the allowed frontend origin.
    pub fn with_frontend_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors.allowed_origin = origin.into();
        self
    }

    /// Address to bind, e.g. `127.0.0.1:8000`.
    pub fn bind_addr(&self) -> String {
        self.service.bind_addr()
    }
}
