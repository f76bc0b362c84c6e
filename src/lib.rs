//! thumbfix — fill in missing thumbnail URLs in a JSON record catalogue.
//!
//! The work happens in [`thumbfix_core`]; this crate drives one run for the
//! command line and owns the text it prints to standard output, so the
//! binary and the harnesses agree on it.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use thumbfix_core::{Document, NormalizeError, Normalizer, ThumbnailSource};

pub use thumbfix_core;

pub const MSG_NOT_FOUND: &str = "File does not exist.";
pub const MSG_NO_CHANGES: &str = "No changes were made.";
pub const MSG_FIX_PARSER: &str = "Fix parser?";

/// Normalize an already loaded document and report on `out`.
///
/// Miss lines are written and flushed before the document is written back,
/// so they reach the operator even when the write fails. The summary line
/// only follows a successful write.
pub fn process<S: ThumbnailSource>(
    normalizer: &Normalizer<S>,
    mut document: Document,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let outcome = normalizer.normalize_document(&mut document);

    for line in miss_lines(&outcome.misses) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    normalizer.commit(path, &document, &outcome)?;
    writeln!(out, "{}", summary_line(outcome.changed))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the line for an error with a dedicated exit status and return that
/// status. Unmodeled faults are handed back unchanged.
pub fn report_fatal(err: NormalizeError, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    match (err.exit_code(), error_line(&err)) {
        (Some(code), Some(line)) => {
            writeln!(out, "{line}")?;
            Ok(ExitCode::from(code))
        }
        _ => Err(err.into()),
    }
}

/// Two lines per URL that matched the platform but had no video id.
pub fn miss_lines(misses: &[String]) -> Vec<String> {
    misses
        .iter()
        .flat_map(|url| [format!("Erroneous video url {url}"), MSG_FIX_PARSER.to_string()])
        .collect()
}

pub fn summary_line(changed: usize) -> String {
    match changed {
        0 => MSG_NO_CHANGES.to_string(),
        n => format!("Committed {n} changes."),
    }
}

/// The line printed for errors that end the run with a dedicated exit
/// status. `None` for unmodeled faults.
pub fn error_line(err: &NormalizeError) -> Option<String> {
    match err {
        NormalizeError::NotFound { .. } => Some(MSG_NOT_FOUND.to_string()),
        NormalizeError::InvalidJson { source, .. } => Some(format!("Invalid json: {source}")),
        NormalizeError::Io { .. } => None,
    }
}
