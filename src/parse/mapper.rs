use super::field::{extract_field, AUTHOR_LABEL, DATE_LABEL};
use super::normalize::normalize;
use super::split::split_log;
use crate::model::{CommitBlock, CommitRecord, CommitSequence, Field};
use tracing::debug;

/// Parses a whole `git log` text into commit records in log order.
///
/// `None` means there was no log at all and yields an empty sequence, as
/// does empty text. Short or malformed blocks produce partial records; this
/// never fails.
pub fn map_history(raw: Option<&str>) -> CommitSequence {
    let Some(raw) = raw else {
        debug!("no log text supplied");
        return Vec::new();
    };

    let blocks = split_log(Some(raw));
    debug!(bytes = raw.len(), blocks = blocks.len(), "mapping git history");
    map_blocks(blocks)
}

pub fn map_blocks<'a, I>(blocks: I) -> CommitSequence
where
    I: IntoIterator<Item = CommitBlock<'a>>,
{
    blocks
        .into_iter()
        .map(|block| build_commit_detail(&normalize(block)))
        .collect()
}

/// Builds the record for one normalized block: line 0 is the identifier,
/// line 1 the author and line 2 the date.
///
/// A block with no lines still yields a record, with every key omitted.
pub fn build_commit_detail(block: &CommitBlock<'_>) -> CommitRecord {
    commit_detail(block)
        .merge(extract_field(block.line(1), Field::Author, AUTHOR_LABEL))
        .merge(extract_field(block.line(2), Field::Date, DATE_LABEL))
}

fn commit_detail(block: &CommitBlock<'_>) -> CommitRecord {
    match block.line(0) {
        Some(id) => CommitRecord::with_field(Field::Commit, id),
        None => {
            debug!("commit block has no identifier line");
            CommitRecord::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(commit: &str, author: &str, date: &str) -> CommitRecord {
        CommitRecord {
            commit: Some(commit.to_string()),
            author: Some(author.to_string()),
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn absent_history_is_empty() {
        assert!(map_history(None).is_empty());
    }

    #[test]
    fn empty_history_is_empty() {
        assert!(map_history(Some("")).is_empty());
    }

    #[test]
    fn well_formed_block() {
        let block = CommitBlock::new(vec![
            "abc123",
            "Author: Jane Doe <jane@example.com>",
            "Date: Mon Jan 1 00:00:00 2024",
        ]);
        assert_eq!(
            build_commit_detail(&block),
            record(
                "abc123",
                "Jane Doe <jane@example.com>",
                "Mon Jan 1 00:00:00 2024"
            )
        );
    }

    #[test]
    fn identifier_only_block() {
        let detail = build_commit_detail(&CommitBlock::new(vec!["abc123"]));
        assert_eq!(detail, CommitRecord::with_field(Field::Commit, "abc123"));
        assert_eq!(detail.author, None);
        assert_eq!(detail.date, None);
    }

    #[test]
    fn zero_line_block_yields_empty_record() {
        let records = map_blocks(vec![CommitBlock::new(vec![])]);
        assert_eq!(records, vec![CommitRecord::new()]);
    }

    #[test]
    fn two_commits_in_log_order() {
        let raw = "commit abc123\nAuthor: A\nDate: D\n\ncommit def456\nAuthor: B\nDate: E\n";
        assert_eq!(
            map_history(Some(raw)),
            vec![record("abc123", "A", "D"), record("def456", "B", "E")]
        );
    }

    #[test]
    fn git_log_with_messages() {
        let raw = "\
commit 9fceb02d0ae598e95dc970b74767f19372d61af8
Author: Jane Doe <jane@example.com>
Date:   Mon Jan 1 00:00:00 2024 +0000

    Add parser

commit 3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b
Author: John Roe <john@example.com>
Date:   Sun Dec 31 23:59:59 2023 +0000

    Initial import
";
        let records = map_history(Some(raw));
        assert_eq!(
            records,
            vec![
                record(
                    "9fceb02d0ae598e95dc970b74767f19372d61af8",
                    "Jane Doe <jane@example.com>",
                    "Mon Jan 1 00:00:00 2024 +0000"
                ),
                record(
                    "3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b",
                    "John Roe <john@example.com>",
                    "Sun Dec 31 23:59:59 2023 +0000"
                ),
            ]
        );
    }

    #[test]
    fn crlf_history_matches_lf_history() {
        let lf = "commit abc123\nAuthor: A\nDate: D\n\ncommit def456\nAuthor: B\nDate: E\n";
        let crlf = lf.replace('\n', "\r\n");
        assert_eq!(map_history(Some(lf)), map_history(Some(crlf.as_str())));
    }

    #[test]
    fn duplicates_are_kept() {
        let raw = "commit a\nAuthor: X\ncommit a\nAuthor: X\n";
        let records = map_history(Some(raw));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }
}
