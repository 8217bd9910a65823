//! Backend Library
//!
//! This crate provides the HTTP REST API: a root index, a health check and a
//! read-only user directory. It can be run as a standalone service or embedded
//! in the combined binary.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use common::{AppError, AppResult};
use domain::{seed_users, User};

use crate::config::BackendConfig;
use crate::routes::create_router;
use crate::state::{AppState, StaticUserDirectory};

/// Bind the configured address and serve until Ctrl-C.
pub async fn run_server(config: BackendConfig) -> AppResult<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    let directory = load_directory(seed_users())?;
    let state = AppState::new(Arc::new(directory), config);
    serve(listener, state, shutdown_signal()).await
}

/// Validate the user records and build the directory served by the API.
pub fn load_directory(users: Vec<User>) -> AppResult<StaticUserDirectory> {
    let directory = StaticUserDirectory::new(users)?;
    info!(users = directory.len(), "User directory loaded");
    Ok(directory)
}

/// Serve the API on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state)?;

    let local = listener
        .local_addr()
        .map_err(|e| AppError::internal(format!("Listener has no local address: {}", e)))?;
    info!("Backend server running on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    info!("Backend server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_load() {
        let directory = load_directory(seed_users()).unwrap();
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn malformed_records_fail_startup_with_validation_error() {
        let result = load_directory(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "not-an-email"),
        ]);

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "user 2 has an invalid email"),
            other => panic!("expected validation error, got {:?}", other.map(|d| d.len())),
        }
    }
}
