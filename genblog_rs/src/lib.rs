//! # genblog
//!
//! Prerenders the research blog built from `genblog-leptos` into static
//! HTML, one document per page.
//!
//! - [`config`] - optional `genblog.toml` (title, theme, dataset, tag cloud)
//! - [`export`] - site walk and `<dir>/<path>/index.html` layout
//! - [`cli`] - the `genblog` command line
//!
//! ```bash
//! genblog render /post/0 --theme light
//! genblog export ./public
//! genblog routes
//! ```

pub mod cli;
pub mod config;
pub mod export;

pub use config::SiteConfig;
pub use export::{export_site, site_paths};
