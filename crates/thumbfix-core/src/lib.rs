//! thumbfix-core — fill in missing thumbnails in a JSON record catalogue.
//!
//! # Pipeline
//!
//! ```text
//! file ──► Document::load ──► Normalizer ──► Document::save ──► file
//!                                 │          (only if changed)
//!                           ThumbnailSource
//! ```
//!
//! Everything runs synchronously in a single pass.

pub mod config;
pub mod document;
pub mod error;
pub mod normalizer;
pub mod source;
pub mod types;

pub use config::Config;
pub use error::{NormalizeError, SourceError, EXIT_INVALID_JSON, EXIT_NOT_FOUND};
pub use normalizer::{normalize, Normalizer, Outcome, RecordOutcome};
pub use source::{PatternSource, ThumbnailSource};
pub use types::{Document, Record, Thumbnail};
