//! HTTP handlers.

pub mod health_handler;
pub mod root_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use root_handler::root_routes;
pub use user_handler::user_routes;
