//! Configuration structures and loading logic.

use crate::config::modes::{SortMode, TimeWindow};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub selectors: SelectorsConfig,
}

/// Subreddit targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// List of subreddits to download from.
    #[serde(default)]
    pub subreddits: Vec<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Listing sort order (hot, new, rising, controversial, top).
    #[serde(default)]
    pub sort: SortMode,

    /// Time window for top listings.
    #[serde(default)]
    pub time: TimeWindow,

    /// Maximum number of posts to fetch per subreddit.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Whether to download album posts.
    #[serde(default = "default_true")]
    pub download_albums: bool,

    /// Whether to download gif posts.
    #[serde(default = "default_true")]
    pub download_gifs: bool,

    /// Whether to download posts marked NSFW.
    #[serde(default)]
    pub download_nsfw: bool,

    /// Directory downloads are written to. Must already exist.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            time: TimeWindow::default(),
            limit: default_limit(),
            download_albums: true,
            download_gifs: true,
            download_nsfw: false,
            download_directory: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Selector override configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorsConfig {
    /// Optional JSON file with domain selector overrides.
    #[serde(default)]
    pub overrides_file: Option<PathBuf>,
}

fn default_limit() -> u32 {
    10
}

fn default_user_agent() -> String {
    "imgbot/0.1 (subreddit image downloader)".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
