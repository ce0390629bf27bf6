//! Root document for prerendered pages.

use leptos::prelude::*;

use crate::styles::SITE_CSS;

/// Full `<html>` wrapper around the shell.
#[component]
pub fn SiteDocument(
    /// Contents of `<title>`
    title: String,
    /// Opaque analytics identifier; emitted as a `<meta>` tag only
    analytics_id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="tr">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {analytics_id.map(|id| view! { <meta name="analytics-id" content=id /> })}
                <style>{SITE_CSS}</style>
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}
