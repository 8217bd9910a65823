//! Health and index payloads.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DOCS_PATH, HEALTH_MESSAGE, HEALTH_PATH, HEALTH_STATUS_OK, ROOT_PATH, USERS_PATH,
    WELCOME_MESSAGE,
};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// Liveness status
    #[cfg_attr(feature = "openapi", schema(example = "ok"))]
    pub status: String,
    /// Human-readable message
    #[cfg_attr(feature = "openapi", schema(example = "Backend is running"))]
    pub message: String,
}

impl HealthResponse {
    /// The payload of a live backend
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

/// Paths advertised by the root index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EndpointIndex {
    pub root: String,
    pub health: String,
    pub users: String,
    pub docs: String,
}

impl Default for EndpointIndex {
    fn default() -> Self {
        Self {
            root: ROOT_PATH.to_string(),
            health: HEALTH_PATH.to_string(),
            users: USERS_PATH.to_string(),
            docs: DOCS_PATH.to_string(),
        }
    }
}

/// Root index response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RootResponse {
    /// Greeting
    pub message: String,
    /// Known endpoints
    pub endpoints: EndpointIndex,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            endpoints: EndpointIndex::default(),
        }
    }
}
