// Post detail page - /post/{id}
use genblog_common::RouteParam;
use leptos::prelude::*;

use super::NotFoundPage;
use crate::components::{ICON_ARROW_SQUARE_OUT, Icon};
use crate::context::SiteContext;

#[component]
pub fn PostDetailPage(id: RouteParam) -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let article = match site.store.resolve_article(&id) {
        Ok(article) => article.clone(),
        Err(err) => {
            tracing::debug!(error = %err, "post detail falls back to not found");
            return view! { <NotFoundPage /> }.into_any();
        }
    };
    // Guaranteed by store validation, but a missing author should not hide the post.
    let author = site.store.author(article.author_id).ok().cloned();

    view! {
        <article class="post-detail">
            <p class="card-meta">{article.category}</p>
            <h1 class="page-title">{article.title}</h1>
            {author.map(|author| {
                let href = author.href();
                view! {
                    <p class="post-author">
                        <a href=href>{author.name}</a>
                    </p>
                }
            })}
            <p class="post-summary">{article.summary}</p>
            <div class="post-content">{article.content}</div>
            <a href=article.pdf_url class="btn pdf-link" target="_blank" rel="noopener">
                "PDF'i görüntüle"
                <Icon path=ICON_ARROW_SQUARE_OUT size="14" class="external" />
            </a>
            <ul class="keywords">
                {article.keywords.into_iter().map(|keyword| view! {
                    <li>{keyword}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
    .into_any()
}
