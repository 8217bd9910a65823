//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{EndpointIndex, HealthResponse, RootResponse, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root_handler::root,
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
    ),
    components(
        schemas(
            RootResponse,
            EndpointIndex,
            HealthResponse,
            User,
        )
    ),
    tags(
        (name = "Meta", description = "API index"),
        (name = "Health", description = "Liveness check"),
        (name = "Users", description = "Read-only user directory"),
    )
)]
pub struct ApiDoc;
