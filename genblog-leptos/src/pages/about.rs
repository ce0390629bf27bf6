use leptos::prelude::*;

pub const ABOUT_PLACEHOLDER: &str = "(Bu bölüm daha sonra eklenecek.)";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1 class="page-title">"Hakkımda"</h1>
            <p class="placeholder">{ABOUT_PLACEHOLDER}</p>
        </section>
    }
}
