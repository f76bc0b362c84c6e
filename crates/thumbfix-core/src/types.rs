//! Core types for thumbfix-core.
//!
//! A [`Document`] is the ordered array of [`Record`]s persisted in one JSON
//! file. Records keep every key they were read with, in the original order;
//! only the `url` and `img` keys are interpreted.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key holding the record's resource locator.
pub const URL_KEY: &str = "url";

/// Key holding the record's thumbnail URL.
pub const IMG_KEY: &str = "img";

/// One catalogued item: a JSON object with at least a string `url`.
///
/// The object is stored as-is so that fields this tool never looks at
/// survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

/// How a record's `img` field currently looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thumbnail<'a> {
    /// No `img` key at all.
    Absent,
    /// `"img": null`
    Null,
    /// `"img": ""`
    Empty,
    /// A non-empty string.
    Present(&'a str),
    /// Any other JSON value. Left alone.
    Other(&'a Value),
}

impl Thumbnail<'_> {
    /// Absent, null and the empty string all count as missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Thumbnail::Absent | Thumbnail::Null | Thumbnail::Empty)
    }
}

impl Record {
    /// Build a record with only a `url` field.
    pub fn new(url: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(URL_KEY.to_string(), Value::String(url.into()));
        Self { fields }
    }

    pub fn url(&self) -> &str {
        self.fields
            .get(URL_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn thumbnail(&self) -> Thumbnail<'_> {
        match self.fields.get(IMG_KEY) {
            None => Thumbnail::Absent,
            Some(Value::Null) => Thumbnail::Null,
            Some(Value::String(s)) if s.is_empty() => Thumbnail::Empty,
            Some(Value::String(s)) => Thumbnail::Present(s),
            Some(other) => Thumbnail::Other(other),
        }
    }

    pub fn is_missing_thumbnail(&self) -> bool {
        self.thumbnail().is_missing()
    }

    /// Set `img`. An existing key keeps its position; a new one is appended.
    pub fn set_thumbnail(&mut self, thumbnail: impl Into<String>) {
        self.fields
            .insert(IMG_KEY.to_string(), Value::String(thumbnail.into()));
    }

    /// Every field of the record, in document order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get(URL_KEY) {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(format!(
                "record field `{URL_KEY}` must be a string, found {}",
                value_kind(other)
            )),
            None => Err(format!("record is missing the `{URL_KEY}` field")),
        }
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Record::try_from(fields).map_err(de::Error::custom)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The full record array, the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
