//! User domain entity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// User record as served by the backend and shown by the status page.
///
/// Records are server-defined and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u32,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Made-up record served for single-user lookups
    pub fn placeholder(id: u32) -> Self {
        Self::new(id, format!("User {}", id), format!("user{}@example.com", id))
    }

    /// Check if the email looks like an address
    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@')
    }

    /// Check that the record can be served as-is
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "user {} has an empty name",
                self.id
            )));
        }
        if !self.has_valid_email() {
            return Err(DomainError::validation(format!(
                "user {} has an invalid email",
                self.id
            )));
        }
        Ok(())
    }

    /// Line shown for this user in the status page list
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}

/// The fixed user list served by the backend.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(3, "Charlie", "charlie@example.com"),
    ]
}
