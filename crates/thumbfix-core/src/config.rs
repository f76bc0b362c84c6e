//! Configuration types for thumbfix.
//!
//! [`Config::load`] layers an optional user file (`--config`, or
//! `~/.config/thumbfix/config.toml` when it exists) on top of the built-in
//! defaults. The user file is never created. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_MARKER: &str = "youtube.com";
pub const DEFAULT_ID_PATTERN: &str = "v=([^&]*)";
pub const DEFAULT_THUMBNAIL_TEMPLATE: &str = "https://i.ytimg.com/vi/{id}/maxresdefault.jpg";

const DEFAULT_CONFIG: &str = r#"
[platform]
name               = "youtube"
marker             = "youtube.com"
id_pattern         = "v=([^&]*)"
thumbnail_template = "https://i.ytimg.com/vi/{id}/maxresdefault.jpg"

[output]
pretty = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[platform]` section: which URLs get a thumbnail and how it is built.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Substring a record's URL must contain to be considered.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Regex whose first capture group is the video id.
    #[serde(default = "default_id_pattern")]
    pub id_pattern: String,
    /// Thumbnail URL with an `{id}` placeholder.
    #[serde(default = "default_thumbnail_template")]
    pub thumbnail_template: String,
}

fn default_name() -> String { "youtube".to_string() }
fn default_marker() -> String { DEFAULT_MARKER.to_string() }
fn default_id_pattern() -> String { DEFAULT_ID_PATTERN.to_string() }
fn default_thumbnail_template() -> String { DEFAULT_THUMBNAIL_TEMPLATE.to_string() }

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            marker: default_marker(),
            id_pattern: default_id_pattern(),
            thumbnail_template: default_thumbnail_template(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the rewritten document instead of writing it compact.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the configuration, layered on top of the built-in defaults.
    ///
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let user_file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file.format(config::FileFormat::Toml))
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
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("thumbfix")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
