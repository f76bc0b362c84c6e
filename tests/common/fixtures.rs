//! Static record documents used across harnesses.

/// Thumbnail URL the default YouTube source derives for `id`.
pub fn ytimg(id: &str) -> String {
    format!("https://i.ytimg.com/vi/{id}/maxresdefault.jpg")
}

/// The scenario from the operator docs: one YouTube record with an empty
/// thumbnail.
pub const DOC_SINGLE_YOUTUBE: &str =
    r#"[{"url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "img": ""}]"#;

/// A record that is not a video link and has a null thumbnail.
pub const DOC_NON_PLATFORM: &str = r#"[{"url": "https://example.com/video", "img": null}]"#;

/// Syntactically broken JSON.
pub const DOC_MALFORMED: &str = "{not valid json";

/// A realistic press-memorial catalogue mixing every record shape the
/// normalizer distinguishes.
pub const DOC_CATALOGUE: &str = r#"[
  {"year": 2009, "where": "igromania", "title": "Video review", "url": "https://www.youtube.com/watch?v=ABC123&list=PL9", "img": ""},
  {"year": 2011, "where": "stopgame", "title": "Stream", "url": "https://www.youtube.com/watch?v=XYZ789", "img": null},
  {"year": 2012, "where": "dtf", "title": "Article", "url": "https://dtf.ru/games/1", "img": ""},
  {"year": 2013, "where": "kanobu", "title": "Has thumbnail", "url": "https://www.youtube.com/watch?v=keep", "img": "https://cdn.example/keep.png"},
  {"year": 2014, "where": "lki", "title": "Channel", "url": "https://www.youtube.com/channel/UCabc", "img": ""},
  {"year": 2015, "where": "zog", "title": "No img key", "url": "https://youtube.com/watch?v=noimg"}
]"#;

/// A platform URL without a video id and nothing else to fix.
pub const DOC_MISS_ONLY: &str = r#"[{"url": "https://www.youtube.com/channel/UCabc", "img": ""}]"#;

/// Numbers that do not fit `u64`/`f64` exactly next to a record that gets
/// a thumbnail.
pub const DOC_WIDE_NUMBERS: &str = r#"[{"id":123456789012345678901234567890,"ratio":0.10000000000000000000001,"url":"https://www.youtube.com/watch?v=a","img":""}]"#;
