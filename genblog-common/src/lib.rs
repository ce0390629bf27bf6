//! Shared domain types for genblog.
//!
//! This crate holds everything the views and the prerenderer agree on:
//! the read-only [`ContentStore`], the [`Route`] table, the light/dark
//! [`ThemeState`], tag-cloud weighting, form state and the event-driven
//! [`Session`].

mod content;
mod error;
mod forms;
mod route;
mod session;
mod tagcloud;
mod theme;

pub use content::{
    Article, ArticleFilter, Author, ContentStore, ResearchLink, ResearchTopicGroup,
};
pub use error::{BlogError, EntityKind, Result};
pub use forms::{ContactField, ContactForm, FormStatus, SubscribeForm};
pub use route::{Navigation, Route, RouteParam};
pub use session::{Event, Session};
pub use tagcloud::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, TagCloudSizes, TagWeight, tag_cloud};
pub use theme::{ParseThemeError, SubscriptionId, ThemeMode, ThemeState};
