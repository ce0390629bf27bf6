// Home page - tag cloud + research links
use genblog_common::{ArticleFilter, tag_cloud};
use leptos::prelude::*;

use crate::components::{ResearchLinks, TagCloud};
use crate::context::SiteContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let tags = tag_cloud(site.store.articles(&ArticleFilter::all()), site.tag_sizes);
    let topics = site.store.research_topics().to_vec();

    view! {
        <section class="home-topics">
            <h1 class="page-title">"Popüler Konular"</h1>
            <TagCloud tags=tags />
        </section>
        <ResearchLinks topics=topics />
    }
}
