//! Configuration file support for genblog.
//!
//! Loads an optional `genblog.toml`. Every key has a default, so a missing
//! file and an empty file behave the same.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use genblog_common::{ContentStore, TagCloudSizes, ThemeMode};
use genblog_leptos::RenderOptions;
use genblog_leptos::context::DEFAULT_TITLE;
use serde::Deserialize;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "genblog.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the header and `<title>`
    pub title: String,
    /// Theme a new visit starts in
    pub default_theme: ThemeMode,
    /// Opaque analytics id, only emitted as a `<meta>` tag
    pub analytics_id: Option<String>,
    /// JSON dataset replacing the built-in content.
    /// Relative paths are resolved against the config file's directory.
    pub content_path: Option<PathBuf>,
    pub tag_cloud: TagCloudSizes,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_theme: ThemeMode::default(),
            analytics_id: None,
            content_path: None,
            tag_cloud: TagCloudSizes::default(),
            base_dir: None,
        }
    }
}

impl SiteConfig {
    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<SiteConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config");
                Self::default()
            }
        };
        config.base_dir = path.parent().map(Path::to_path_buf);
        config
    }

    /// Load `path`, or `genblog.toml` in the working directory.
    pub fn load(path: Option<&Path>) -> Self {
        Self::load_from_path(path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)))
    }

    /// Where the dataset is read from, if not built in.
    pub fn content_file(&self) -> Option<PathBuf> {
        let path = self.content_path.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// The configured dataset, or the built-in one.
    pub fn content_store(&self) -> Result<ContentStore> {
        match self.content_file() {
            Some(path) => ContentStore::from_path(&path)
                .with_context(|| format!("failed to load content from {}", path.display())),
            None => Ok(ContentStore::builtin()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            analytics_id: self.analytics_id.clone(),
            tag_sizes: self.tag_cloud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("genblog.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "📝 My Blog");
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert!(config.analytics_id.is_none());
        assert!(config.content_file().is_none());
        assert_eq!(config.tag_cloud, TagCloudSizes::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("genblog.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
title = "Gen Günlüğü"
default_theme = "light"
analytics_id = "G-ABC123"

[tag_cloud]
min_size = 10
max_size = 40
"#,
        );

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.title, "Gen Günlüğü");
        assert_eq!(config.default_theme, ThemeMode::Light);
        assert_eq!(config.analytics_id.as_deref(), Some("G-ABC123"));
        assert_eq!(
            config.tag_cloud,
            TagCloudSizes {
                min_size: 10,
                max_size: 40
            }
        );

        let options = config.render_options();
        assert_eq!(options.title, "Gen Günlüğü");
        assert_eq!(options.tag_sizes.max_size, 40);
    }

    #[test]
    fn test_partial_tag_cloud_keeps_other_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[tag_cloud]\nmax_size = 50\n");
        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.tag_cloud.min_size, 12);
        assert_eq!(config.tag_cloud.max_size, 50);
        assert_eq!(config.title, "📝 My Blog");
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "");
        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.title, SiteConfig::default().title);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "default_theme = \"sepia\"");
        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.default_theme, ThemeMode::Dark);

        let path = write_config(&temp, "title = [unterminated");
        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.title, "📝 My Blog");
    }

    #[test]
    fn test_content_path_is_relative_to_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("content.json"),
            r#"{"authors": [{"id": 4, "name": "Dr. D", "bio": "Biyolog"}], "articles": [], "research": []}"#,
        )
        .expect("write content");
        let path = write_config(&temp, "content_path = \"content.json\"");

        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.content_file(), Some(temp.path().join("content.json")));

        let store = config.content_store().expect("load store");
        assert_eq!(store.authors().len(), 1);
        assert_eq!(store.authors()[0].name, "Dr. D");
    }

    #[test]
    fn test_missing_content_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "content_path = \"nope.json\"");
        let err = SiteConfig::load_from_path(&path)
            .content_store()
            .expect_err("missing dataset");
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_builtin_store_without_content_path() {
        let store = SiteConfig::default().content_store().expect("builtin");
        assert!(!store.is_empty());
    }
}
