//! Thumbnail sources: which URLs belong to a video platform, how to pull a
//! video id out of them, and how that id becomes a thumbnail URL.

use regex::Regex;

use crate::config::{PlatformConfig, DEFAULT_ID_PATTERN, DEFAULT_MARKER, DEFAULT_THUMBNAIL_TEMPLATE};
use crate::error::SourceError;

const ID_PLACEHOLDER: &str = "{id}";

/// A video platform the normalizer can derive thumbnails for.
pub trait ThumbnailSource {
    fn name(&self) -> &str;

    /// Whether `url` belongs to this platform at all.
    fn matches(&self, url: &str) -> bool;

    /// The video id in `url`, if one can be extracted. Never empty.
    fn video_id<'u>(&self, url: &'u str) -> Option<&'u str>;

    fn thumbnail_url(&self, video_id: &str) -> String;
}

/// A [`ThumbnailSource`] driven by a marker substring, an id regex and a URL
/// template.
#[derive(Debug, Clone)]
pub struct PatternSource {
    name: String,
    marker: String,
    id_pattern: Regex,
    template: String,
}

impl PatternSource {
    pub fn from_config(cfg: &PlatformConfig) -> Result<Self, SourceError> {
        let id_pattern = Regex::new(&cfg.id_pattern).map_err(|source| SourceError::InvalidPattern {
            pattern: cfg.id_pattern.clone(),
            source,
        })?;
        // captures_len counts the implicit whole-match group.
        if id_pattern.captures_len() < 2 {
            return Err(SourceError::MissingCaptureGroup {
                pattern: cfg.id_pattern.clone(),
            });
        }
        if !cfg.thumbnail_template.contains(ID_PLACEHOLDER) {
            return Err(SourceError::MissingPlaceholder {
                template: cfg.thumbnail_template.clone(),
            });
        }

        Ok(Self {
            name: cfg.name.clone(),
            marker: cfg.marker.clone(),
            id_pattern,
            template: cfg.thumbnail_template.clone(),
        })
    }

    /// `youtube.com` watch URLs → `i.ytimg.com` max-resolution thumbnails.
    pub fn youtube() -> Self {
        Self {
            name: "youtube".to_string(),
            marker: DEFAULT_MARKER.to_string(),
            id_pattern: Regex::new(DEFAULT_ID_PATTERN).expect("built-in id pattern must compile"),
            template: DEFAULT_THUMBNAIL_TEMPLATE.to_string(),
        }
    }
}

impl Default for PatternSource {
    fn default() -> Self {
        Self::youtube()
    }
}

impl ThumbnailSource for PatternSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, url: &str) -> bool {
        url.contains(&self.marker)
    }

    fn video_id<'u>(&self, url: &'u str) -> Option<&'u str> {
        self.id_pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
    }

    fn thumbnail_url(&self, video_id: &str) -> String {
        self.template.replace(ID_PLACEHOLDER, video_id)
    }
}
