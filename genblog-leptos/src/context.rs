//! Context objects provided once at the shell root.
//!
//! Views read these with `expect_context` instead of reaching for globals:
//! [`ThemeContext`] carries the light/dark signal, [`SiteContext`] the
//! read-only content store and site options.

use std::sync::Arc;

use genblog_common::{ContentStore, TagCloudSizes, ThemeMode};
use leptos::prelude::*;

/// Brand shown in the header when no title is configured.
pub const DEFAULT_TITLE: &str = "📝 My Blog";

/// Reactive theme state. Every view that reads `mode` re-renders on toggle.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(mode),
        }
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }
}

/// Site-wide, read-only data.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub store: Arc<ContentStore>,
    pub title: String,
    pub tag_sizes: TagCloudSizes,
}

impl SiteContext {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            title: DEFAULT_TITLE.to_string(),
            tag_sizes: TagCloudSizes::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tag_sizes(mut self, sizes: TagCloudSizes) -> Self {
        self.tag_sizes = sizes;
        self
    }
}

/// Provide both contexts for the current reactive owner.
pub fn provide_site(site: SiteContext, theme: ThemeMode) -> ThemeContext {
    let theme = ThemeContext::new(theme);
    provide_context(site);
    provide_context(theme);
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Shell;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn shell_html() -> String {
        view! { <Shell path="/about".to_string() /> }.to_html()
    }

    #[test]
    fn toggle_twice_restores_mode_and_flips_shell_class() {
        let owner = Owner::new();
        owner.with(|| {
            let site = SiteContext::new(Arc::new(ContentStore::builtin()));
            let theme = provide_site(site, ThemeMode::Dark);
            assert!(shell_html().contains("class=\"app-shell theme-dark\""));

            theme.toggle();
            assert_eq!(theme.get(), ThemeMode::Light);
            assert!(shell_html().contains("class=\"app-shell theme-light\""));

            theme.toggle();
            assert_eq!(theme.get(), ThemeMode::Dark);
            assert!(shell_html().contains("class=\"app-shell theme-dark\""));
        });
    }

    #[test]
    fn site_context_builders() {
        let site = SiteContext::new(Arc::new(ContentStore::empty()))
            .with_title("Gen Günlüğü")
            .with_tag_sizes(TagCloudSizes {
                min_size: 8,
                max_size: 16,
            });
        assert_eq!(site.title, "Gen Günlüğü");
        assert_eq!(site.tag_sizes.max_size, 16);
        assert!(site.store.is_empty());
    }
}
