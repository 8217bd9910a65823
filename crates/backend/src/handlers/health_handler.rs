//! Health check handlers.

use axum::{response::Json, routing::get, Router};

use domain::{HealthResponse, HEALTH_PATH};

use crate::middleware::method_not_allowed;
use crate::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health_check).fallback(method_not_allowed))
}

/// Health check endpoint - the process is up and answering.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Backend is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
