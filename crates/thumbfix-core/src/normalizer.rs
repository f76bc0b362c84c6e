//! Normalizer — fills in missing thumbnails for records that point at a
//! supported video platform.
//!
//! A record is touched only when its thumbnail is missing (absent, null or
//! `""`), its URL matches the [`ThumbnailSource`], and a non-empty video id
//! can be extracted. A platform URL without an id is reported as a miss and
//! left alone. The document is written back only if at least one record
//! changed.

use std::path::Path;

use crate::config::Config;
use crate::error::{NormalizeError, SourceError};
use crate::source::{PatternSource, ThumbnailSource};
use crate::types::{Document, Record};

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Thumbnail already set, or the URL is not a platform URL.
    Unchanged,
    /// Thumbnail derived from the contained video id.
    Filled { video_id: String },
    /// Platform URL, but no video id could be extracted.
    Miss,
}

/// Summary of one pass over a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Number of records whose thumbnail was filled in.
    pub changed: usize,
    /// URLs that matched the platform but yielded no video id, in record order.
    pub misses: Vec<String>,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        self.changed > 0
    }
}

pub struct Normalizer<S = PatternSource> {
    source: S,
    pretty: bool,
}

impl Normalizer<PatternSource> {
    /// Normalizer for `youtube.com` URLs with compact output.
    pub fn youtube() -> Self {
        Self::new(PatternSource::youtube())
    }

    pub fn from_config(cfg: &Config) -> Result<Self, SourceError> {
        Ok(Self::new(PatternSource::from_config(&cfg.platform)?).pretty(cfg.output.pretty))
    }
}

impl Default for Normalizer<PatternSource> {
    fn default() -> Self {
        Self::youtube()
    }
}

impl<S: ThumbnailSource> Normalizer<S> {
    pub fn new(source: S) -> Self {
        Self { source, pretty: false }
    }

    /// Pretty-print the document when it is written back.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn normalize_record(&self, record: &mut Record) -> RecordOutcome {
        if !record.is_missing_thumbnail() || !self.source.matches(record.url()) {
            return RecordOutcome::Unchanged;
        }

        let Some(video_id) = self.source.video_id(record.url()).map(str::to_owned) else {
            tracing::warn!(url = record.url(), platform = self.source.name(), "no video id in url");
            return RecordOutcome::Miss;
        };

        let thumbnail = self.source.thumbnail_url(&video_id);
        tracing::debug!(url = record.url(), %thumbnail, "filled thumbnail");
        record.set_thumbnail(thumbnail);
        RecordOutcome::Filled { video_id }
    }

    /// One in-order pass over every record. Never reorders, adds or removes.
    pub fn normalize_document(&self, document: &mut Document) -> Outcome {
        let mut outcome = Outcome::default();
        for record in document.records_mut() {
            match self.normalize_record(record) {
                RecordOutcome::Unchanged => {}
                RecordOutcome::Filled { .. } => outcome.changed += 1,
                RecordOutcome::Miss => outcome.misses.push(record.url().to_string()),
            }
        }
        outcome
    }

    /// Load the document at `path`, normalize it, and write it back if any
    /// record changed.
    pub fn normalize(&self, path: &Path) -> Result<Outcome, NormalizeError> {
        let mut document = Document::load(path)?;
        tracing::debug!(path = %path.display(), records = document.len(), "loaded document");

        let outcome = self.normalize_document(&mut document);
        self.commit(path, &document, &outcome)?;

        Ok(outcome)
    }

    /// Write `document` back to `path` if `outcome` changed anything.
    /// Returns whether a write happened.
    pub fn commit(&self, path: &Path, document: &Document, outcome: &Outcome) -> Result<bool, NormalizeError> {
        if !outcome.is_changed() {
            tracing::info!(path = %path.display(), "nothing to rewrite");
            return Ok(false);
        }

        document.save(path, self.pretty)?;
        tracing::info!(path = %path.display(), changed = outcome.changed, "document rewritten");
        Ok(true)
    }
}

/// [`Normalizer::normalize`] with the built-in YouTube source.
pub fn normalize(path: &Path) -> Result<Outcome, NormalizeError> {
    Normalizer::youtube().normalize(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
