//! The layout every page is rendered into.
//!
//! ```text
//! Shell
//! ├── Header (brand, theme toggle, desktop nav, menu button)
//! ├── MobileNav (only while the menu is open)
//! ├── main → PageBoundary → RoutedPage (or FallbackNotice)
//! └── Footer (subscribe form)
//! ```
//!
//! A page that fails only replaces `<main>`; the header, navigation and
//! footer stay usable.

use genblog_common::{ContactForm, Route, SubscribeForm};
use leptos::prelude::*;

use super::{Footer, Header, MobileNav};
use crate::context::ThemeContext;
use crate::pages::RoutedPage;

/// Generic message shown when a page fails to render.
pub const FALLBACK_MESSAGE: &str = "Bir şeyler ters gitti. Lütfen sayfayı yenileyin.";

/// App shell. `path` is the current location; it is resolved through the
/// route table on every change.
#[component]
pub fn Shell(
    #[prop(into)] path: Signal<String>,
    /// Initial state of the mobile menu
    #[prop(optional)]
    menu_open: bool,
    /// Initial contact form state
    #[prop(optional)]
    contact: ContactForm,
    /// Initial footer subscription state
    #[prop(optional)]
    subscribe: SubscribeForm,
    /// Show the fallback notice instead of the page, after a page render
    /// panicked during prerendering
    #[prop(optional)]
    page_failed: bool,
) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let menu_open = RwSignal::new(menu_open);
    let route = Memo::new(move |_| Route::resolve(&path.get()).route);

    // Menu state is per-page.
    Effect::new(move |previous: Option<Route>| {
        let current = route.get();
        if previous.is_some_and(|previous| previous != current) {
            menu_open.set(false);
        }
        current
    });

    view! {
        <div class=move || format!("app-shell theme-{}", theme.get().css_class())>
            <Header route=route menu_open=menu_open />
            <Show when=move || menu_open.get()>
                <MobileNav route=route />
            </Show>
            <main class="content">
                {move || {
                    if page_failed {
                        return view! { <FallbackNotice /> }.into_any();
                    }
                    let route = route.get();
                    tracing::debug!(route = route.name(), "rendering page");
                    let contact = contact.clone();
                    view! {
                        <PageBoundary>
                            <RoutedPage route=route contact=contact />
                        </PageBoundary>
                    }
                    .into_any()
                }}
            </main>
            <Footer subscribe=subscribe />
        </div>
    }
}

/// Catches `Err` results from the page below and shows [`FallbackNotice`].
#[component]
pub fn PageBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|_errors| {
            tracing::error!("page failed to render, showing fallback");
            view! { <FallbackNotice /> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

/// Replacement for a page that could not be rendered.
#[component]
pub fn FallbackNotice() -> impl IntoView {
    view! {
        <section class="fallback" role="alert">
            <p>{FALLBACK_MESSAGE}</p>
            <a href="/" class="btn">"Anasayfa"</a>
        </section>
    }
}
