//! Integration tests for API endpoints.
//!
//! These tests run the real router, both in-process and over a bound TCP
//! listener, against stub user directories.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

use backend_lib::config::BackendConfig;
use backend_lib::routes::create_router;
use backend_lib::state::{AppState, StaticUserDirectory, UserDirectory};
use common::{AppError, AppResult};
use domain::{HealthResponse, User};

// =============================================================================
// Stub directories
// =============================================================================

/// Directory whose backing store is unavailable
struct BrokenDirectory;

#[async_trait]
impl UserDirectory for BrokenDirectory {
    async fn list(&self) -> AppResult<Vec<User>> {
        Err(AppError::internal("directory offline"))
    }
}

fn crowd(n: u32) -> StaticUserDirectory {
    let users = (1..=n)
        .map(|i| User::new(i, format!("User {}", i), format!("user{}@example.com", i)))
        .collect();
    StaticUserDirectory::new(users).unwrap()
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = create_router(state)
        .unwrap()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_is_ok_regardless_of_directory() {
    let state = AppState::new(Arc::new(BrokenDirectory), BackendConfig::default());
    let (status, body) = get_json(state, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_value(body).unwrap();
    assert!(!health.message.is_empty());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn users_have_unique_ids_names_and_emails() {
    let state = AppState::new(Arc::new(crowd(25)), BackendConfig::default());
    let (status, body) = get_json(state, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_value(body).unwrap();
    assert_eq!(users.len(), 25);

    let ids: HashSet<u32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids.len(), users.len());
    for user in &users {
        assert!(!user.name.is_empty());
        assert!(user.email.contains('@'));
    }
}

#[tokio::test]
async fn seeded_users_are_served_verbatim() {
    let (status, body) = get_json(AppState::seeded(BackendConfig::default()), "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            {"id": 1, "name": "Alice", "email": "alice@example.com"},
            {"id": 2, "name": "Bob", "email": "bob@example.com"},
            {"id": 3, "name": "Charlie", "email": "charlie@example.com"}
        ])
    );
}

#[tokio::test]
async fn directory_failure_is_internal_error() {
    let state = AppState::new(Arc::new(BrokenDirectory), BackendConfig::default());
    let (status, body) = get_json(state, "/api/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn single_user_lookup_ignores_directory() {
    let state = AppState::new(Arc::new(BrokenDirectory), BackendConfig::default());
    let (status, body) = get_json(state, "/api/users/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"id": 7, "name": "User 7", "email": "user7@example.com"})
    );
}

// =============================================================================
// Live server
// =============================================================================

#[tokio::test]
async fn serves_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(backend_lib::serve(
        listener,
        AppState::seeded(BackendConfig::default()),
        async move {
            let _ = stop_rx.await;
        },
    ));

    let health: HealthResponse = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, HealthResponse::ok());

    stop_tx.send(()).unwrap();
    tokio_test::assert_ok!(server.await.unwrap());
}
