//! Application state for dependency injection.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::{seed_users, DomainResult, User};

use crate::config::BackendConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only source of user records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All users, ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// In-memory directory over a constant user list.
#[derive(Debug, Clone)]
pub struct StaticUserDirectory {
    users: Arc<[User]>,
}

impl StaticUserDirectory {
    /// Build a directory from the given records.
    ///
    /// Records are sorted by id; malformed records are rejected.
    pub fn new(mut users: Vec<User>) -> DomainResult<Self> {
        for user in &users {
            user.validate()?;
        }
        users.sort_by_key(|u| u.id);
        if let Some(pair) = users.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(domain::DomainError::validation(format!(
                "duplicate user id {}",
                pair[0].id
            )));
        }
        Ok(Self {
            users: users.into(),
        })
    }

    /// Directory with the built-in user list.
    pub fn seeded() -> Self {
        Self {
            users: seed_users().into(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.to_vec())
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserDirectory>,
    pub config: BackendConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserDirectory>, config: BackendConfig) -> Self {
        Self { users, config }
    }

    /// State backed by the built-in user list.
    pub fn seeded(config: BackendConfig) -> Self {
        Self::new(Arc::new(StaticUserDirectory::seeded()), config)
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;

    #[tokio::test]
    async fn seeded_directory_lists_three_users_in_id_order() {
        let directory = StaticUserDirectory::seeded();
        let users = directory.list().await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(
            users.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn new_sorts_records() {
        let directory = StaticUserDirectory::new(vec![
            User::new(9, "Zed", "zed@example.com"),
            User::new(4, "Dana", "dana@example.com"),
        ])
        .unwrap();

        let ids: Vec<u32> = directory.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![4, 9]);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = StaticUserDirectory::new(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(1, "Alicia", "alicia@example.com"),
        ]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn new_rejects_malformed_records() {
        let result = StaticUserDirectory::new(vec![User::new(1, "", "alice@example.com")]);
        assert!(result.is_err());
    }
}
