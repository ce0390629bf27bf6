// Page views, one per route
//
// Every page reads the content store from `SiteContext`; detail pages get
// their id as a `RouteParam` and fall back to `NotFoundPage` themselves.

mod about;
mod articles;
mod author_detail;
mod authors;
mod contact;
mod home;
mod not_found;
mod post_detail;

pub use about::{ABOUT_PLACEHOLDER, AboutPage};
pub use articles::{ArticlesPage, EMPTY_ARTICLES_MESSAGE};
pub use author_detail::AuthorDetailPage;
pub use authors::{AuthorsPage, EMPTY_AUTHORS_MESSAGE};
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::{NOT_FOUND_MESSAGE, NotFoundPage};
pub use post_detail::PostDetailPage;

use genblog_common::{ContactForm, Route};
use leptos::prelude::*;

use crate::context::SiteContext;

/// Why a page could not be rendered. Surfaces through the shell's
/// `ErrorBoundary` as the fallback notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no site context provided for page '{0}'")]
    MissingSite(&'static str),
}

/// Select the page for a resolved route.
#[component]
pub fn RoutedPage(
    route: Route,
    /// Initial contact form state, used by the contact page only
    #[prop(optional)]
    contact: ContactForm,
) -> Result<AnyView, PageError> {
    if use_context::<SiteContext>().is_none() {
        return Err(PageError::MissingSite(route.name()));
    }

    let page = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Articles => view! { <ArticlesPage /> }.into_any(),
        Route::Authors => view! { <AuthorsPage /> }.into_any(),
        Route::AuthorDetail(id) => view! { <AuthorDetailPage id=id /> }.into_any(),
        Route::PostDetail(id) => view! { <PostDetailPage id=id /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Contact => view! { <ContactPage form=contact /> }.into_any(),
    };
    Ok(page)
}
