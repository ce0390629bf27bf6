// Authors page
use genblog_common::{ArticleFilter, Author};
use leptos::prelude::*;

use crate::context::SiteContext;

pub const EMPTY_AUTHORS_MESSAGE: &str = "Henüz yazar yok.";

#[component]
pub fn AuthorsPage() -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let authors: Vec<(Author, usize)> = site
        .store
        .authors()
        .iter()
        .map(|author| {
            let count = site.store.articles(&ArticleFilter::author(author.id)).len();
            (author.clone(), count)
        })
        .collect();

    view! {
        <section class="authors">
            <h1 class="page-title">"Yazarlar"</h1>
            {if authors.is_empty() {
                view! { <p class="empty-state">{EMPTY_AUTHORS_MESSAGE}</p> }.into_any()
            } else {
                view! {
                    <div class="author-list">
                        {authors.into_iter().map(|(author, count)| {
                            let href = author.href();
                            view! {
                                <div class="card author-card">
                                    <h2 class="card-title">
                                        <a href=href>{author.name}</a>
                                    </h2>
                                    <p class="card-summary">{author.bio}</p>
                                    <p class="card-meta">{format!("{count} makale")}</p>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}
        </section>
    }
}
