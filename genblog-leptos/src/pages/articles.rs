// Articles page - every article as a card
use genblog_common::{Article, ArticleFilter};
use leptos::prelude::*;

use crate::context::SiteContext;

pub const EMPTY_ARTICLES_MESSAGE: &str = "Henüz makale yok.";

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let cards: Vec<(Article, String)> = site
        .store
        .articles(&ArticleFilter::all())
        .into_iter()
        .map(|article| {
            let author = site
                .store
                .author(article.author_id)
                .map(|author| author.name.clone())
                .unwrap_or_default();
            (article.clone(), author)
        })
        .collect();

    view! {
        <section class="articles">
            <h1 class="page-title">"Makaleler"</h1>
            {if cards.is_empty() {
                view! { <p class="empty-state">{EMPTY_ARTICLES_MESSAGE}</p> }.into_any()
            } else {
                view! {
                    <div class="article-list">
                        {cards.into_iter().map(|(article, author)| view! {
                            <ArticleCard article=article author=author />
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}
        </section>
    }
}

/// Summary card linking to the article detail page.
#[component]
fn ArticleCard(article: Article, author: String) -> impl IntoView {
    let href = article.href();
    view! {
        <article class="card article-card">
            <p class="card-meta">
                <span class="category">{article.category}</span>
                " · "
                <span class="author">{author}</span>
            </p>
            <h2 class="card-title">
                <a href=href.clone()>{article.title}</a>
            </h2>
            <p class="card-summary">{article.summary}</p>
            <a href=href class="read-more">"Devamını oku →"</a>
        </article>
    }
}
