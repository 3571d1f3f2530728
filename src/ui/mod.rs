//! UI components and layouts.
//!
//! Leptos components rendered server-side into complete HTML documents.
//!
//! # Structure
//!
//! - [`app`]: Document shell and page rendering
//! - [`layout`]: Header, login control and content region
//! - [`examples`]: Static example prompts and their list
//! - [`chat`]: Chat landing page
//! - [`components`]: Reusable ShadCN-style UI components

pub mod app;
pub mod chat;
pub mod components;
pub mod examples;
pub mod layout;

pub use app::{Page, render_page};
