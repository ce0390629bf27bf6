//! Server-side rendering of a session to a complete HTML document.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use genblog_common::{ContentStore, Route, Session, TagCloudSizes, ThemeMode};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::components::{Shell, SiteDocument};
use crate::context::{DEFAULT_TITLE, SiteContext, provide_site};

/// Site-level options for prerendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Brand and `<title>` suffix
    pub title: String,
    /// Opaque analytics identifier, only emitted as `<meta>`
    pub analytics_id: Option<String>,
    /// Tag cloud pixel range
    pub tag_sizes: TagCloudSizes,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            analytics_id: None,
            tag_sizes: TagCloudSizes::default(),
        }
    }
}

fn page_label(route: &Route) -> &'static str {
    match route {
        Route::Home => "Anasayfa",
        Route::Articles => "Makaleler",
        Route::Authors => "Yazarlar",
        Route::AuthorDetail(_) => "Yazar",
        Route::PostDetail(_) => "Yazı",
        Route::About => "Hakkımda",
        Route::Contact => "İletişim",
    }
}

/// Render the page a session currently shows, including `<!DOCTYPE html>`.
///
/// A panic while rendering is caught here; the document is rendered again
/// with the page replaced by the fallback notice, keeping header,
/// navigation and footer.
pub fn render_session(store: Arc<ContentStore>, options: &RenderOptions, session: &Session) -> String {
    let retry = Arc::clone(&store);
    guarded(
        || render_document(store, options, session, false),
        || render_document(retry, options, session, true),
    )
}

/// Render `path` for a fresh session in the given theme.
pub fn render_path(
    store: Arc<ContentStore>,
    options: &RenderOptions,
    theme: ThemeMode,
    path: &str,
) -> String {
    render_session(store, options, &Session::at(theme, path))
}

fn render_document(
    store: Arc<ContentStore>,
    options: &RenderOptions,
    session: &Session,
    page_failed: bool,
) -> String {
    let site = SiteContext::new(store)
        .with_title(options.title.clone())
        .with_tag_sizes(options.tag_sizes);
    let title = format!("{} · {}", page_label(session.route()), options.title);
    let analytics_id = options.analytics_id.clone();

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_site(site, session.theme());
        let path = session.location().to_string();
        let menu_open = session.menu_open();
        let contact = session.contact().clone();
        let subscribe = session.subscribe().clone();
        view! {
            <SiteDocument title=title analytics_id=analytics_id>
                <Shell
                    path=path
                    menu_open=menu_open
                    contact=contact
                    subscribe=subscribe
                    page_failed=page_failed
                />
            </SiteDocument>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>\n{}", html)
}

/// Run `render`, falling back to `fallback` if it panics.
fn guarded(render: impl FnOnce() -> String, fallback: impl FnOnce() -> String) -> String {
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(html) => html,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%reason, "page render failed, serving fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FALLBACK_MESSAGE, NAV_LINKS};

    fn builtin() -> Arc<ContentStore> {
        Arc::new(ContentStore::builtin())
    }

    #[test]
    fn guarded_passes_through_success() {
        let html = guarded(|| "ok".to_string(), || "fallback".to_string());
        assert_eq!(html, "ok");
    }

    #[test]
    fn guarded_catches_render_panics() {
        let session = Session::at(ThemeMode::Dark, "/articles");
        let html = guarded(
            || panic!("boom"),
            || render_document(builtin(), &RenderOptions::default(), &session, true),
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(FALLBACK_MESSAGE));
        assert!(html.contains("class=\"app-shell theme-dark\""));
    }

    #[test]
    fn fallback_keeps_shell_chrome() {
        let session = Session::at(ThemeMode::Light, "/articles");
        let html = render_document(builtin(), &RenderOptions::default(), &session, true);

        assert!(html.contains(FALLBACK_MESSAGE));
        for (_, label) in NAV_LINKS {
            assert!(html.contains(label), "missing nav link {label}");
        }
        assert!(html.contains("data-role=\"theme-toggle\""));
        assert!(html.contains("RSS Aboneliği"));
        assert!(html.contains("class=\"app-shell theme-light\""));
        // the page body itself is gone
        assert!(!html.contains("article-card"));
    }

    #[test]
    fn healthy_render_has_no_fallback() {
        let html = render_path(builtin(), &RenderOptions::default(), ThemeMode::Dark, "/articles");
        assert!(html.contains("article-card"));
        assert!(!html.contains(FALLBACK_MESSAGE));
    }

    #[test]
    fn title_names_the_page() {
        let html = render_path(
            builtin(),
            &RenderOptions::default(),
            ThemeMode::Dark,
            "/authors",
        );
        assert!(html.contains("<title>Yazarlar · 📝 My Blog</title>"));
    }
}
