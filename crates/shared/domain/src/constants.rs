//! Domain-level constants.
//!
//! These constants define the public HTTP surface and the fixed strings
//! shown by the status page.

// =============================================================================
// Endpoints
// =============================================================================

/// Root index path
pub const ROOT_PATH: &str = "/";

/// Health check path
pub const HEALTH_PATH: &str = "/api/health";

/// User listing path
pub const USERS_PATH: &str = "/api/users";

/// Single user path (axum route syntax)
pub const USER_BY_ID_PATH: &str = "/api/users/:id";

/// Interactive API documentation path
pub const DOCS_PATH: &str = "/docs";

/// Build the concrete path for a single user
pub fn user_path(id: u32) -> String {
    format!("{}/{}", USERS_PATH, id)
}

// =============================================================================
// Network defaults
// =============================================================================

/// Base URL the frontend talks to
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default backend bind host
pub const DEFAULT_BACKEND_HOST: &str = "127.0.0.1";

/// Default backend port
pub const DEFAULT_BACKEND_PORT: u16 = 8000;

/// Origin the frontend is served from (allowed by CORS)
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

// =============================================================================
// Health
// =============================================================================

/// Status value reported by a live backend
pub const HEALTH_STATUS_OK: &str = "ok";

/// Message reported by a live backend
pub const HEALTH_MESSAGE: &str = "Backend is running";

/// Greeting returned by the root index
pub const WELCOME_MESSAGE: &str = "Welcome to the Rust API";

// =============================================================================
// Status page
// =============================================================================

/// Page title
pub const PAGE_TITLE: &str = "Full-Stack Rust App";

/// Status text before the health check has completed
pub const STATUS_LOADING: &str = "Loading...";

/// Status text when the health check failed
pub const STATUS_UNREACHABLE: &str = "Error connecting to backend";

/// Placeholder shown while users are loading
pub const USERS_LOADING: &str = "Loading users...";
