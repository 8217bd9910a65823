//! Domain layer - Core entities and payloads.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! All types here are shared between the backend and the frontend client.

pub mod constants;
pub mod error;
pub mod health;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use health::{EndpointIndex, HealthResponse, RootResponse};
pub use user::{seed_users, User};
