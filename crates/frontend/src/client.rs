//! HTTP client for the backend API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use domain::{user_path, HealthResponse, User, HEALTH_PATH, USERS_PATH};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Calls the status page makes against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// GET /api/health
    async fn fetch_health(&self) -> ClientResult<HealthResponse>;

    /// GET /api/users
    async fn fetch_users(&self) -> ClientResult<Vec<User>>;

    /// GET /api/users/{id}
    async fn fetch_user(&self, id: u32) -> ClientResult<User>;
}

/// `reqwest` implementation of [`BackendApi`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the configured backend.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .timeout(Duration::from_millis(config.http.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.http.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(path, status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn fetch_health(&self) -> ClientResult<HealthResponse> {
        self.get_json(HEALTH_PATH).await
    }

    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        self.get_json(USERS_PATH).await
    }

    async fn fetch_user(&self, id: u32) -> ClientResult<User> {
        self.get_json(&user_path(id)).await
    }
}
