//! Keyword cloud and research link list for the home page.

use genblog_common::{ResearchTopicGroup, TagWeight};
use leptos::prelude::*;

use super::{ICON_ARROW_SQUARE_OUT, Icon};

/// Shown instead of the cloud when no article has keywords.
pub const EMPTY_CLOUD_MESSAGE: &str = "Henüz etiket yok.";

/// Weighted keyword cloud. Font size comes from [`TagWeight::size`].
#[component]
pub fn TagCloud(tags: Vec<TagWeight>) -> impl IntoView {
    if tags.is_empty() {
        return view! { <p class="empty-state">{EMPTY_CLOUD_MESSAGE}</p> }.into_any();
    }

    view! {
        <div class="tag-cloud">
            {tags.into_iter().map(|tag| {
                view! {
                    <span
                        class="tag"
                        style=format!("font-size: {}px", tag.size)
                        title=format!("{} kez geçiyor", tag.count)
                        data-count=tag.count.to_string()
                    >
                        {tag.value}
                    </span>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Curated research papers grouped by topic.
#[component]
pub fn ResearchLinks(topics: Vec<ResearchTopicGroup>) -> impl IntoView {
    if topics.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="research">
            <h2 class="section-title">"Güncel Araştırmalar"</h2>
            {topics.into_iter().map(|group| {
                view! {
                    <div class="research-group">
                        <h3 class="research-topic">{group.topic}</h3>
                        <ul class="research-links">
                            {group.links.into_iter().map(|link| {
                                view! {
                                    <li>
                                        <a href=link.url target="_blank" rel="noopener">
                                            {link.title}
                                            <Icon path=ICON_ARROW_SQUARE_OUT size="14" class="external" />
                                        </a>
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
    .into_any()
}
