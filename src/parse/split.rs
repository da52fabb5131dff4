use super::normalize::{remove_blank_blocks, remove_blank_lines};
use crate::model::CommitBlock;
use tracing::trace;

/// Keyword that opens every commit in `git log` output.
///
/// Splitting is a plain substring split, so the word also splits inside
/// author names or message text.
pub const COMMIT_DELIMITER: &str = "commit";

/// Splits raw log text into commit blocks, dropping the blank artifact
/// segment before the first delimiter and any other blank segment.
pub fn split_log(raw: Option<&str>) -> Vec<CommitBlock<'_>> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let blocks: Vec<CommitBlock<'_>> = split_segments(raw).map(split_lines).collect();
    let total = blocks.len();
    let blocks = remove_blank_blocks(blocks);
    trace!(segments = total, kept = blocks.len(), "split log on commit delimiter");
    blocks
}

/// Every raw segment between delimiters, blank ones included.
pub fn split_segments(raw: &str) -> impl Iterator<Item = &str> + '_ {
    raw.split(COMMIT_DELIMITER)
}

/// Splits one segment on `\n` or `\r\n`, dropping blank lines.
pub fn split_lines(segment: &str) -> CommitBlock<'_> {
    let lines: Vec<&str> = segment.lines().collect();
    CommitBlock::new(remove_blank_lines(&lines))
}
