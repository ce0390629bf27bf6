// Author detail page - /author/{id}
use genblog_common::{ArticleFilter, RouteParam};
use leptos::prelude::*;

use super::NotFoundPage;
use crate::context::SiteContext;

#[component]
pub fn AuthorDetailPage(id: RouteParam) -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let author = match site.store.resolve_author(&id) {
        Ok(author) => author.clone(),
        Err(err) => {
            tracing::debug!(error = %err, "author detail falls back to not found");
            return view! { <NotFoundPage /> }.into_any();
        }
    };

    let articles: Vec<(String, String)> = site
        .store
        .articles(&ArticleFilter::author(author.id))
        .into_iter()
        .map(|article| (article.href(), article.title.clone()))
        .collect();

    view! {
        <section class="author-detail">
            <h1 class="page-title">{author.name}</h1>
            <p class="author-bio">{author.bio}</p>
            <h2 class="section-title">"Yazıları"</h2>
            {if articles.is_empty() {
                view! { <p class="empty-state">"Bu yazarın henüz makalesi yok."</p> }.into_any()
            } else {
                view! {
                    <ul class="author-articles">
                        {articles.into_iter().map(|(href, title)| view! {
                            <li><a href=href>{title}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
    .into_any()
}
