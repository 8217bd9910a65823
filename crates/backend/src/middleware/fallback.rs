//! Fallbacks for unmatched routes and methods.

use axum::http::{Method, Uri};
use tracing::debug;

use common::AppError;

/// Respond to unknown paths with the JSON not-found error.
pub async fn not_found(uri: Uri) -> AppError {
    debug!("No route for {}", uri);
    AppError::NotFound
}

/// Respond to a known path called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    debug!("{} not allowed on {}", method, uri);
    AppError::MethodNotAllowed
}
