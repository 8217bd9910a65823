//! Frontend Library
//!
//! This crate provides the status page: an HTTP client for the backend, the
//! page view model that fetches health and users on mount, and text/HTML
//! renderers for the resulting state.

pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod render;

use std::sync::Arc;

pub use client::{BackendApi, BackendClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use page::{MountHandle, PageState, StatusPage, UsersState};
pub use render::{render_html, render_text, RenderFormat};

/// Mount a fresh page against `api`, wait for both requests and return the
/// final state.
pub async fn load_page(api: Arc<dyn BackendApi>) -> PageState {
    let page = StatusPage::new();
    page.mount(api).settled().await;
    page.snapshot()
}
