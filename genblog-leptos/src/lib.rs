//! # genblog-leptos
//!
//! Leptos components for a small Turkish-language research blog.
//!
//! The same component tree runs in two places:
//!
//! - in the browser (`landing/`, client-side rendered), where the shell is
//!   driven by the router's location signal
//! - on the server or in the CLI with the `ssr` feature, where
//!   [`render_path`] / [`render_session`] produce a complete HTML document
//!
//! ## Architecture
//!
//! - [`context`] - `SiteContext` (content store, title) and `ThemeContext`
//! - [`components`] - the shell, header, footer and tag cloud
//! - [`pages`] - one view per route
//! - [`styles`] - the stylesheet for both themes
//!
//! ## Prerendering
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use genblog_common::{ContentStore, ThemeMode};
//! use genblog_leptos::{RenderOptions, render_path};
//!
//! let store = Arc::new(ContentStore::builtin());
//! let html = render_path(store, &RenderOptions::default(), ThemeMode::Dark, "/articles");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod components;
pub mod context;
pub mod pages;
pub mod styles;

#[cfg(any(feature = "ssr", test))]
mod render;

#[cfg(any(feature = "ssr", test))]
pub use render::{RenderOptions, render_path, render_session};
