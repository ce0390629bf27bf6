//! CSS for the blog.
//!
//! Both themes are driven by custom properties scoped to the shell's
//! `theme-light` / `theme-dark` class, so toggling the theme is a single
//! class swap.
//!
//! The stylesheet is embedded as text inside `<style>` during SSR, so it
//! must not contain `<`, `>` or `&`.

/// Complete stylesheet for the shell and every page.
pub const SITE_CSS: &str = r#"
.app-shell {
    --bg: #ffffff;
    --bg-soft: #fafafa;
    --text: #000000;
    --text-muted: #71717a;
    --border: #e4e4e7;
    --accent: #2563eb;
    min-height: 100vh;
    font-family: system-ui, -apple-system, Segoe UI, sans-serif;
    background: var(--bg);
    color: var(--text);
}

.app-shell.theme-dark {
    --bg: #000000;
    --bg-soft: #18181b;
    --text: #ffffff;
    --text-muted: #a1a1aa;
    --border: #27272a;
    --accent: #60a5fa;
}

a { color: inherit; }

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 24px;
    border-bottom: 1px solid var(--border);
}

.brand { font-size: 1.5rem; font-weight: 700; text-decoration: none; }

.header-actions { display: flex; align-items: center; gap: 16px; }

.theme-toggle,
.menu-toggle {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}

.theme-icon { transition: transform 0.3s ease; }
.rotate-180 { transform: rotate(180deg); }

.nav-desktop { display: none; gap: 24px; font-size: 0.875rem; }
.nav-link { text-decoration: none; color: var(--text-muted); }
.nav-link.active,
.nav-link:hover { color: var(--text); }

.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 16px 24px;
    border-bottom: 1px solid var(--border);
    background: var(--bg-soft);
}

@media (min-width: 768px) {
    .nav-desktop { display: flex; }
    .menu-toggle,
    .nav-mobile { display: none; }
}

.content {
    max-width: 48rem;
    margin: 0 auto;
    padding: 40px 24px;
}

.page-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 16px; }
.section-title { font-size: 1.25rem; font-weight: 600; margin: 48px 0 16px; }

.tag-cloud { display: flex; flex-wrap: wrap; gap: 8px 16px; align-items: baseline; }
.tag { color: var(--accent); cursor: default; }

.research-group { margin-bottom: 24px; }
.research-topic { font-weight: 600; margin-bottom: 8px; }
.research-links { padding-left: 20px; }
.external { margin-left: 4px; vertical-align: middle; }

.article-list,
.author-list { display: flex; flex-direction: column; gap: 32px; }

.card {
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
    background: var(--bg-soft);
}

.card-meta { font-size: 0.8rem; color: var(--text-muted); }
.card-title { font-size: 1.25rem; font-weight: 600; margin: 8px 0; }
.card-title a { text-decoration: none; }

.keywords { display: flex; flex-wrap: wrap; gap: 8px; list-style: none; padding: 0; }
.keywords li {
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 2px 10px;
    font-size: 0.8rem;
}

.post-content { line-height: 1.7; margin: 24px 0; }

.empty-state,
.placeholder { font-style: italic; color: var(--text-muted); }

.not-found,
.fallback { text-align: center; padding: 48px 0; }

.contact-form,
.subscribe-form {
    display: flex;
    flex-direction: column;
    gap: 16px;
    max-width: 28rem;
    margin: 0 auto;
}

.subscribe-form { flex-direction: row; justify-content: center; }

input,
textarea {
    padding: 8px 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg);
    color: var(--text);
    font: inherit;
}

.btn {
    padding: 8px 16px;
    border: none;
    border-radius: 8px;
    background: var(--accent);
    color: #ffffff;
    cursor: pointer;
    text-decoration: none;
}

.form-confirmation { text-align: center; color: var(--accent); }

.site-footer {
    text-align: center;
    padding: 40px 24px;
    font-size: 0.875rem;
    color: var(--text-muted);
}
"#;
