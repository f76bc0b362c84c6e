//! Test builders — ergonomic constructors for records, documents and
//! on-disk record files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thumbfix_core::{Document, Record};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("https://www.youtube.com/watch?v=abc")
///     .empty_img()
///     .field("year", 2010)
///     .build();
/// ```
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("url".to_string(), Value::String(url.into()));
        Self { fields }
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.fields.insert("img".to_string(), Value::String(img.into()));
        self
    }

    pub fn empty_img(self) -> Self {
        self.img("")
    }

    pub fn null_img(mut self) -> Self {
        self.fields.insert("img".to_string(), Value::Null);
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Record {
        Record::try_from(self.fields).expect("builder always sets a string url")
    }
}

// ---------------------------------------------------------------------------
// Documents and files
// ---------------------------------------------------------------------------

pub fn document(records: impl IntoIterator<Item = Record>) -> Document {
    Document::new(records.into_iter().collect())
}

/// Parse a JSON literal into a [`Document`].
pub fn parse_document(raw: &str) -> Document {
    serde_json::from_str(raw).expect("fixture must be a valid record document")
}

/// A record file inside its own temporary directory. The directory is
/// removed when this value is dropped.
pub struct RecordFile {
    dir: tempfile::TempDir,
    path: PathBuf,
}

impl RecordFile {
    /// Write `contents` verbatim to `records.json` in a fresh directory.
    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("records.json");
        std::fs::write(&path, contents).expect("write record file");
        Self { dir, path }
    }

    /// A path in a fresh directory where no file exists.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.json");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read record file")
    }

    pub fn document(&self) -> Document {
        parse_document(&self.contents())
    }
}
