use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "Aradığınız içerik bulunamadı.";

/// Rendered by detail pages when their id does not resolve.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found" data-role="not-found">
            <h1 class="page-title">"404"</h1>
            <p>{NOT_FOUND_MESSAGE}</p>
            <a href="/" class="btn">"Anasayfaya dön"</a>
        </section>
    }
}
