//! Domain-specific assertion macros for thumbfix harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record broke *which* normalizer invariant.

use thumbfix_core::{Document, Record};

// ---------------------------------------------------------------------------
// Thumbnail assertions
// ---------------------------------------------------------------------------

/// Assert that a `Record` has a specific non-empty thumbnail.
///
/// ```rust
/// assert_thumbnail!(record, "https://i.ytimg.com/vi/abc/maxresdefault.jpg");
/// ```
#[macro_export]
macro_rules! assert_thumbnail {
    ($record:expr, $expected:expr) => {{
        let record: &thumbfix_core::Record = &$record;
        let expected: &str = &$expected;
        match record.thumbnail() {
            thumbfix_core::Thumbnail::Present(actual) if actual == expected => {}
            other => panic!(
                "assert_thumbnail! failed:\n  url:      {}\n  expected: {:?}\n  actual:   {:?}",
                record.url(),
                expected,
                other
            ),
        }
    }};
}

/// Assert that a `Record` still has a missing thumbnail.
#[macro_export]
macro_rules! assert_thumbnail_missing {
    ($record:expr) => {{
        let record: &thumbfix_core::Record = &$record;
        if !record.is_missing_thumbnail() {
            panic!(
                "assert_thumbnail_missing! failed:\n  url: {}\n  img: {:?}",
                record.url(),
                record.thumbnail()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Document invariants
// ---------------------------------------------------------------------------

/// Same length and the same URLs in the same order.
pub fn assert_order_preserved(before: &Document, after: &Document) {
    let urls = |doc: &Document| doc.records().iter().map(|r| r.url().to_string()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(urls(before), urls(after), "record order changed");
}

/// Every field other than `img` is identical, record by record.
pub fn assert_only_thumbnails_changed(before: &Document, after: &Document) {
    assert_eq!(before.len(), after.len(), "record count changed");
    for (i, (b, a)) in before.records().iter().zip(after.records()).enumerate() {
        pretty_assertions::assert_eq!(
            without_img(b),
            without_img(a),
            "record {i} changed outside of img"
        );
    }
}

fn without_img(record: &Record) -> serde_json::Map<String, serde_json::Value> {
    let mut fields = record.fields().clone();
    fields.remove("img");
    fields
}
