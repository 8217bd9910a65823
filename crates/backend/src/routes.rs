//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppResult;
use domain::DOCS_PATH;

use crate::handlers::{health_routes, root_routes, user_routes};
use crate::middleware::{cors_layer, not_found};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Path the OpenAPI document is served from
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.config.cors)?;

    Ok(Router::new()
        // Index
        .merge(root_routes())
        // Health check
        .merge(health_routes())
        // User directory
        .merge(user_routes())
        // Swagger UI
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // JSON 404 for everything else
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
