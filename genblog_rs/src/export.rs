//! Static export: one `index.html` per reachable page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use genblog_common::{ArticleFilter, ContentStore, Route, ThemeMode};
use genblog_leptos::{RenderOptions, render_path};

/// Every path a visitor can reach: the static routes, then each author and
/// each article detail page.
pub fn site_paths(store: &ContentStore) -> Vec<String> {
    let mut paths: Vec<String> = Route::static_routes().iter().map(Route::path).collect();
    paths.extend(store.authors().iter().map(|author| author.href()));
    paths.extend(
        store
            .articles(&ArticleFilter::all())
            .into_iter()
            .map(|article| article.href()),
    );
    paths
}

/// `<out_dir>/<path>/index.html`; `/` maps to `<out_dir>/index.html`.
pub fn output_file(out_dir: &Path, path: &str) -> PathBuf {
    let relative = path.trim_matches('/');
    if relative.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(relative).join("index.html")
    }
}

/// Render every page of the site into `out_dir`. Returns the written files.
pub fn export_site(
    store: Arc<ContentStore>,
    options: &RenderOptions,
    theme: ThemeMode,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let paths = site_paths(&store);
    tracing::info!(pages = paths.len(), out_dir = %out_dir.display(), "exporting site");

    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        let file = output_file(out_dir, &path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let html = render_path(store.clone(), options, theme, &path);
        fs::write(&file, html).with_context(|| format!("failed to write {}", file.display()))?;
        tracing::debug!(%path, file = %file.display(), "page written");
        written.push(file);
    }
    Ok(written)
}
