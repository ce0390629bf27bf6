//! Site header: brand, theme toggle, desktop navigation and the mobile menu.

use genblog_common::{Route, ThemeMode};
use leptos::prelude::*;

use super::{ICON_LIST, ICON_MOON, ICON_SUN, ICON_X, Icon};
use crate::context::{SiteContext, ThemeContext};

/// Navigation entries shared by the desktop and mobile menus.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Anasayfa"),
    ("/articles", "Makaleler"),
    ("/authors", "Yazarlar"),
    ("/about", "Hakkımda"),
    ("/contact", "İletişim"),
];

/// Which navigation entry a route belongs to. Detail pages highlight
/// their list.
fn section_href(route: &Route) -> &'static str {
    match route {
        Route::Home => "/",
        Route::Articles | Route::PostDetail(_) => "/articles",
        Route::Authors | Route::AuthorDetail(_) => "/authors",
        Route::About => "/about",
        Route::Contact => "/contact",
    }
}

#[component]
fn NavLinks(route: Memo<Route>) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let href = *href;
            let class = move || {
                if section_href(&route.get()) == href {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! { <a href=href class=class>{*label}</a> }
        })
        .collect::<Vec<_>>()
}

/// Header bar with brand, theme toggle, desktop links and menu button.
#[component]
pub fn Header(route: Memo<Route>, menu_open: RwSignal<bool>) -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let theme = expect_context::<ThemeContext>();

    let toggle_label = move || match theme.get() {
        ThemeMode::Dark => "Açık temaya geç",
        ThemeMode::Light => "Koyu temaya geç",
    };

    view! {
        <header class="site-header">
            <a href="/" class="brand">{site.title}</a>
            <div class="header-actions">
                <button
                    class="theme-toggle"
                    data-role="theme-toggle"
                    title=toggle_label
                    aria-label=toggle_label
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.get() {
                        ThemeMode::Dark => view! { <Icon path=ICON_SUN class="theme-icon" /> }.into_any(),
                        ThemeMode::Light => view! { <Icon path=ICON_MOON class="theme-icon rotate-180" /> }.into_any(),
                    }}
                </button>
                <nav class="nav-desktop">
                    <NavLinks route=route />
                </nav>
                <button
                    class="menu-toggle"
                    data-role="menu-toggle"
                    aria-label="Menü"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <Icon path=ICON_X size="24" /> }.into_any()
                    } else {
                        view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                    }}
                </button>
            </div>
        </header>
    }
}

/// Collapsible navigation for narrow screens.
#[component]
pub fn MobileNav(route: Memo<Route>) -> impl IntoView {
    view! {
        <nav class="nav-mobile" data-role="mobile-nav">
            <NavLinks route=route />
        </nav>
    }
}
