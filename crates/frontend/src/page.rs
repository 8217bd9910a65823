//! Status page view model.
//!
//! The page owns two independent pieces of state: the backend status line
//! and the users list. Mounting the page fires one health request and one
//! users request; each settles into its own state cell, in any order, and a
//! failure in one never touches the other.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use domain::{User, STATUS_LOADING, STATUS_UNREACHABLE};

use crate::client::BackendApi;

/// Users list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
        }
    }
}

/// Snapshot of everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub status: String,
    pub users: Vec<User>,
    pub loading: bool,
}

/// The status page.
#[derive(Debug, Clone)]
pub struct StatusPage {
    status: Arc<watch::Sender<String>>,
    users: Arc<watch::Sender<UsersState>>,
}

impl Default for StatusPage {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPage {
    /// A freshly created page: status loading, users loading.
    pub fn new() -> Self {
        let (status, _) = watch::channel(STATUS_LOADING.to_string());
        let (users, _) = watch::channel(UsersState::default());
        Self {
            status: Arc::new(status),
            users: Arc::new(users),
        }
    }

    /// Issue the health and users requests, once each.
    ///
    /// Both run as separate tasks with no retry and no cancellation.
    pub fn mount(&self, api: Arc<dyn BackendApi>) -> MountHandle {
        let status = Arc::clone(&self.status);
        let health_api = Arc::clone(&api);
        let health = tokio::spawn(async move {
            match health_api.fetch_health().await {
                Ok(health) => {
                    debug!(status = %health.status, "Health check succeeded");
                    status.send_replace(health.message);
                }
                Err(e) => {
                    warn!("Health check failed: {}", e);
                    status.send_replace(STATUS_UNREACHABLE.to_string());
                }
            }
        });

        let users_state = Arc::clone(&self.users);
        let users = tokio::spawn(async move {
            match api.fetch_users().await {
                Ok(users) => {
                    debug!(count = users.len(), "Users loaded");
                    users_state.send_replace(UsersState {
                        users,
                        loading: false,
                    });
                }
                Err(e) => {
                    error!("Error fetching users: {}", e);
                    users_state.send_modify(|state| state.loading = false);
                }
            }
        });

        MountHandle { health, users }
    }

    /// Current status line.
    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// Current users state.
    pub fn users(&self) -> UsersState {
        self.users.borrow().clone()
    }

    /// Subscribe to status line changes.
    pub fn watch_status(&self) -> watch::Receiver<String> {
        self.status.subscribe()
    }

    /// Subscribe to users state changes.
    pub fn watch_users(&self) -> watch::Receiver<UsersState> {
        self.users.subscribe()
    }

    /// Everything the page displays, right now.
    pub fn snapshot(&self) -> PageState {
        let users = self.users();
        PageState {
            status: self.status(),
            users: users.users,
            loading: users.loading,
        }
    }
}

/// Handles to the two in-flight requests of a mount.
#[derive(Debug)]
pub struct MountHandle {
    health: JoinHandle<()>,
    users: JoinHandle<()>,
}

impl MountHandle {
    /// Wait until both requests have settled.
    pub async fn settled(self) {
        let (health, users) = futures::join!(self.health, self.users);
        if let Err(e) = health {
            error!("Health task failed: {}", e);
        }
        if let Err(e) = users {
            error!("Users task failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{HealthResponse, USERS_LOADING};

    use super::*;
    use crate::client::MockBackendApi;
    use crate::error::ClientError;
    use crate::render::render_text;

    fn users(n: u32) -> Vec<User> {
        (1..=n)
            .map(|i| User::new(i, format!("User {}", i), format!("user{}@example.com", i)))
            .collect()
    }

    #[tokio::test]
    async fn starts_in_loading_state() {
        let page = StatusPage::new();
        let state = page.snapshot();

        assert_eq!(state.status, "Loading...");
        assert!(state.loading);
        assert!(state.users.is_empty());
        assert!(render_text(&state).contains(USERS_LOADING));
    }

    #[tokio::test]
    async fn successful_mount_fills_both_cells() {
        let mut api = MockBackendApi::new();
        api.expect_fetch_health()
            .times(1)
            .returning(|| Ok(HealthResponse::ok()));
        api.expect_fetch_users()
            .times(1)
            .returning(|| Ok(users(3)));

        let page = StatusPage::new();
        page.mount(Arc::new(api)).settled().await;
        let state = page.snapshot();

        assert_eq!(state.status, "Backend is running");
        assert!(!state.loading);
        assert_eq!(state.users, users(3));
    }

    #[tokio::test]
    async fn health_failure_does_not_affect_users() {
        let mut api = MockBackendApi::new();
        api.expect_fetch_health()
            .returning(|| Err(ClientError::status("/api/health", 500)));
        api.expect_fetch_users().returning(|| Ok(users(2)));

        let page = StatusPage::new();
        page.mount(Arc::new(api)).settled().await;
        let state = page.snapshot();

        assert_eq!(state.status, "Error connecting to backend");
        assert_eq!(state.users.len(), 2);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn users_failure_clears_loading_and_keeps_list_empty() {
        let mut api = MockBackendApi::new();
        api.expect_fetch_health()
            .returning(|| Ok(HealthResponse::ok()));
        api.expect_fetch_users()
            .returning(|| Err(ClientError::status("/api/users", 503)));

        let page = StatusPage::new();
        page.mount(Arc::new(api)).settled().await;
        let state = page.snapshot();

        assert_eq!(state.status, "Backend is running");
        assert!(!state.loading);
        assert!(state.users.is_empty());
    }

    #[tokio::test]
    async fn watchers_see_users_arrive() {
        let mut api = MockBackendApi::new();
        api.expect_fetch_health()
            .returning(|| Ok(HealthResponse::ok()));
        api.expect_fetch_users().returning(|| Ok(users(1)));

        let page = StatusPage::new();
        let mut rx = page.watch_users();
        let handle = page.mount(Arc::new(api));

        let settled = rx.wait_for(|state| !state.loading).await.unwrap().clone();
        assert_eq!(settled.users.len(), 1);
        handle.settled().await;
    }
}
