//! Middleware for cross-origin access and unmatched routes or methods.

mod cors;
mod fallback;

pub use cors::cors_layer;
pub use fallback::{method_not_allowed, not_found};
