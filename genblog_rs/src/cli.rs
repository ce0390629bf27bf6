//! Command-line surface of the `genblog` binary.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use genblog_common::{Event, Route, Session, ThemeMode};
use genblog_leptos::render_session;

use crate::config::SiteConfig;
use crate::export::export_site;

/// Prerender the research blog to static HTML.
#[derive(Parser, Debug)]
#[command(name = "genblog")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Config file (default: ./genblog.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one page to stdout.
    Render(RenderArgs),
    /// Render every page into a directory.
    Export(ExportArgs),
    /// Print the route table.
    Routes,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to render, e.g. `/post/0`. Unknown paths render the home page.
    pub path: String,
    /// Theme override (light or dark)
    #[arg(long)]
    pub theme: Option<ThemeMode>,
    /// Render with the mobile menu open
    #[arg(long)]
    pub menu_open: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output directory; created when missing
    pub out_dir: PathBuf,
    /// Theme override (light or dark)
    #[arg(long)]
    pub theme: Option<ThemeMode>,
}

/// Execute a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Routes => {
            for (pattern, name) in Route::table() {
                writeln!(out, "{pattern:<14} {name}")?;
            }
        }
        Command::Render(args) => {
            let config = SiteConfig::load(cli.config.as_deref());
            let store = Arc::new(config.content_store()?);
            let mut session = Session::at(args.theme.unwrap_or(config.default_theme), &args.path);
            if session.navigation().redirected {
                tracing::info!(path = %args.path, "unknown path, rendering home");
            }
            if args.menu_open {
                session.dispatch(Event::ToggleMenu);
            }
            let html = render_session(store, &config.render_options(), &session);
            writeln!(out, "{html}")?;
        }
        Command::Export(args) => {
            let config = SiteConfig::load(cli.config.as_deref());
            let store = Arc::new(config.content_store()?);
            let theme = args.theme.unwrap_or(config.default_theme);
            let written = export_site(store, &config.render_options(), theme, &args.out_dir)
                .with_context(|| format!("export to {} failed", args.out_dir.display()))?;
            writeln!(
                out,
                "Exported {} pages to {}",
                written.len(),
                args.out_dir.display()
            )?;
        }
    }
    Ok(())
}
