use super::normalize::is_blank;
use crate::model::{CommitRecord, Field};
use tracing::trace;

pub const AUTHOR_LABEL: &str = "Author:";
pub const DATE_LABEL: &str = "Date:";

/// Extracts `field` from `line` by splitting on `label`.
///
/// Returns a record holding at most the one key. A missing line, or a line
/// with nothing but whitespace around the label, leaves the key out.
/// A non-blank line without the label is a single fragment and is taken
/// whole.
pub fn extract_field(line: Option<&str>, field: Field, label: &str) -> CommitRecord {
    let Some(line) = line else {
        trace!(key = field.key(), "line missing, field omitted");
        return CommitRecord::new();
    };

    match first_fragment(line, label) {
        Some(value) => CommitRecord::with_field(field, value),
        None => {
            trace!(key = field.key(), line, "no value after label, field omitted");
            CommitRecord::new()
        }
    }
}

/// First non-blank fragment of `line` split on `label`, trimmed.
///
/// When the label occurs more than once only the text up to its second
/// occurrence is returned.
pub fn first_fragment<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.split(label)
        .find(|fragment| !is_blank(fragment))
        .map(str::trim)
}
