//! Layout components shared by every page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (prerender only)
//! └── Shell
//!     ├── Header
//!     │   └── NavLinks
//!     ├── MobileNav
//!     ├── PageBoundary → RoutedPage (see crate::pages)
//!     └── Footer
//! ```

mod document;
mod footer;
mod header;
mod icons;
mod shell;
mod tag_cloud;

pub use document::SiteDocument;
pub use footer::Footer;
pub use header::{Header, MobileNav, NAV_LINKS};
pub use icons::*;
pub use shell::{FALLBACK_MESSAGE, FallbackNotice, PageBoundary, Shell};
pub use tag_cloud::{EMPTY_CLOUD_MESSAGE, ResearchLinks, TagCloud};
