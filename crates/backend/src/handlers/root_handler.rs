//! Root index handler.

use axum::{response::Json, routing::get, Router};

use domain::{RootResponse, ROOT_PATH};

use crate::middleware::method_not_allowed;
use crate::state::AppState;

/// Create root routes.
pub fn root_routes() -> Router<AppState> {
    Router::new().route(ROOT_PATH, get(root).fallback(method_not_allowed))
}

/// List the available endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "API index", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}
