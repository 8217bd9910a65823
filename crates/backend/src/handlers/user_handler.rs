//! User handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{User, USERS_PATH, USER_BY_ID_PATH};

use crate::middleware::method_not_allowed;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(USERS_PATH, get(list_users).fallback(method_not_allowed))
        .route(USER_BY_ID_PATH, get(get_user).fallback(method_not_allowed))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    debug!(count = users.len(), "Listing users");
    Ok(Json(users))
}

/// Get user by ID
///
/// Any numeric id yields a made-up `User <id>` record; the directory is not
/// consulted.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "ID is not a number")
    )
)]
pub async fn get_user(id: Result<Path<u32>, PathRejection>) -> AppResult<Json<User>> {
    let Path(id) = id.map_err(|e| AppError::bad_request(e.body_text()))?;
    debug!(id, "Serving placeholder user");
    Ok(Json(User::placeholder(id)))
}
