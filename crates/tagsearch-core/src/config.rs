//! Configuration types for tagsearch.
//!
//! [`Config::load`] reads `~/.config/tagsearch/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::links::{self, LinkTemplates};
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
base_url = "https://www.flickr.com/search/?q="

[share]
subject       = "Flickr search results"
message       = "Check out the results of this Flickr search: {url}"
chooser_title = "Share search to:"
# Command that receives the share text on stdin, e.g. "wl-copy" or "xclip -selection clipboard".
# command = "wl-copy"

[launcher]
browser = "xdg-open"

[storage]
# Defaults to $XDG_DATA_HOME/tagsearch/searches.json when unset.
# path = "/home/me/searches.json"

[ui]
theme = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/tagsearch/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String { links::DEFAULT_BASE_URL.to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

/// `[share]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_chooser_title")]
    pub chooser_title: String,
    /// Program (plus arguments) fed the share text on stdin.
    #[serde(default)]
    pub command: Option<String>,
}

fn default_subject() -> String { links::DEFAULT_SHARE_SUBJECT.to_string() }
fn default_message() -> String { links::DEFAULT_SHARE_MESSAGE.to_string() }
fn default_chooser_title() -> String { links::DEFAULT_CHOOSER_TITLE.to_string() }

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            message: default_message(),
            chooser_title: default_chooser_title(),
            command: None,
        }
    }
}

/// `[launcher]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    #[serde(default = "default_browser")]
    pub browser: String,
}

fn default_browser() -> String { "xdg-open".to_string() }

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { browser: default_browser() }
    }
}

/// `[storage]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: default_theme() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/tagsearch/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer the file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// URL and share templates for the store.
    pub fn link_templates(&self) -> LinkTemplates {
        LinkTemplates {
            base_url: self.search.base_url.clone(),
            share_subject: self.share.subject.clone(),
            share_message: self.share.message.clone(),
            share_chooser_title: self.share.chooser_title.clone(),
        }
    }

    /// Where the saved searches live: `[storage] path` if set, otherwise the
    /// namespace file under the XDG data directory.
    pub fn store_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| data_dir().join(format!("{}.json", crate::store::NAMESPACE)))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("tagsearch")
        .join("config.toml")
}

fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("tagsearch")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
