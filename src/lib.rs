//! Q&A chat front-end shell
//!
//! Server-rendered Leptos components for a chat/Q&A application: a static
//! list of example prompts and a layout shell with a title link, an optional
//! login control and a content region.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving rendered pages and static assets
//! - **UI**: Leptos SSR components rendered into full HTML documents
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`server`]: HTTP routes and startup
//! - [`telemetry`]: Structured logging setup
//! - [`ui`]: Layout, example prompts and pages

// Nested view! trees exceed the default type recursion depth
#![recursion_limit = "256"]
// Leptos #[component] functions take owned props by value
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}
