// genblog in the browser - client-side rendered Leptos 0.8 app.
// Build with: trunk serve

use std::io;
use std::sync::Arc;

use genblog_common::{ContentStore, Route, ThemeMode};
use genblog_leptos::components::Shell;
use genblog_leptos::context::{SiteContext, ThemeContext, provide_site};
use genblog_leptos::styles::SITE_CSS;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Buffers one formatted event and hands it to the browser console on drop.
struct ConsoleWriter(Vec<u8>);

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ConsoleWriter {
    /// The buffered event without its trailing newline, if any was written.
    fn line(&self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.0);
        let line = line.trim_end();
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            web_sys::console::log_1(&line.into());
        }
    }
}

// No clock on wasm32-unknown-unknown, so events carry no timestamp.
fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter(Vec::new()))
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}

#[component]
fn App() -> impl IntoView {
    let site = SiteContext::new(Arc::new(ContentStore::builtin()));
    let theme = provide_site(site, ThemeMode::default());

    // Page-level `dark` class follows the theme so the body background matches.
    Effect::new(move |_| sync_document_theme(theme));

    view! {
        <style>{SITE_CSS}</style>
        <Router>
            <RoutedShell />
        </Router>
    }
}

/// Shell driven by the router location. Unknown paths are replaced with `/`.
#[component]
fn RoutedShell() -> impl IntoView {
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());
    let pathname = location.pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        if Route::parse(&path).is_none() {
            tracing::debug!(%path, "unknown path, redirecting home");
            navigate.with_value(|nav| {
                nav(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
        }
    });

    view! { <Shell path=Signal::derive(move || pathname.get()) /> }
}

fn sync_document_theme(theme: ThemeContext) {
    let mode = theme.get();
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if mode.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        web_sys::console::warn_1(&"failed to update document theme class".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn console_writer_collects_one_event_line() {
        let mut writer = ConsoleWriter(Vec::new());
        writeln!(writer, " DEBUG genblog: unknown path, redirecting home").unwrap();
        assert_eq!(
            writer.line().as_deref(),
            Some(" DEBUG genblog: unknown path, redirecting home")
        );
        // keep the browser call out of native test runs
        writer.0.clear();
    }

    #[test]
    fn empty_writer_has_no_line() {
        let writer = ConsoleWriter(b"\n".to_vec());
        assert_eq!(writer.line(), None);
    }
}
