//! CORS middleware - allows the frontend origin to call the API.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use common::{AppError, AppResult, CorsConfig};

/// Build the CORS layer for the configured frontend origin.
pub fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origin = config.allowed_origin.parse::<HeaderValue>().map_err(|e| {
        AppError::internal(format!(
            "Invalid frontend origin '{}': {}",
            config.allowed_origin, e
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(config.max_age_seconds)))
}
