use crate::error::{GitgraphError, Result};
use chrono::{DateTime, FixedOffset};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `git log`'s default date format.
const GIT_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the first-parent history of `HEAD` in `git log` layout.
    ///
    /// Only the header lines are written (`commit`, `Author:`, `Date:`),
    /// one blank line between commits. An unborn `HEAD` renders as empty
    /// text.
    pub fn render_log(&self, max_count: Option<usize>, progress: bool) -> Result<String> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            info!(path = %self.path.display(), "HEAD is unborn, no history to render");
            return Ok(String::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let pb = if progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Rendering history...");

        let mut out = String::new();
        let mut rendered = 0usize;
        let mut next: Option<ObjectId> = Some(head_commit.id);

        while let Some(commit_id) = next {
            if max_count.is_some_and(|max| rendered >= max) {
                break;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?;
            let time = commit
                .time()
                .map_err(|e| GitgraphError::InvalidDate(format!("{commit_id}: {e}")))?;

            if rendered > 0 {
                out.push('\n');
            }
            let author = format!("{} <{}>", author.name, author.email);
            let date = format_git_date(time.seconds, time.offset)?;
            write_header(&mut out, &commit_id.to_string(), &author, &date)?;

            rendered += 1;
            pb.inc(1);
            next = commit.parent_ids().next().map(|id| id.detach());
        }

        pb.finish_with_message("History rendered");
        debug!(commits = rendered, bytes = out.len(), "rendered git log text");
        Ok(out)
    }
}

/// Append one commit's `git log` header lines to `out`.
pub fn write_header(out: &mut String, id: &str, author: &str, date: &str) -> Result<()> {
    writeln!(out, "commit {id}")?;
    writeln!(out, "Author: {author}")?;
    writeln!(out, "Date:   {date}")?;
    Ok(())
}

/// Format a git timestamp the way `git log` prints it by default.
pub fn format_git_date(seconds: i64, offset: i32) -> Result<String> {
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitgraphError::InvalidDate(format!("Invalid UTC offset: {offset}s")))?;
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| GitgraphError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(utc.with_timezone(&tz).format(GIT_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_epoch_in_utc() {
        assert_eq!(format_git_date(0, 0).unwrap(), "Thu Jan 1 00:00:00 1970 +0000");
    }

    #[test]
    fn applies_offset() {
        // 2024-01-01T00:00:00Z seen from UTC+09:00
        assert_eq!(
            format_git_date(1_704_067_200, 9 * 3600).unwrap(),
            "Mon Jan 1 09:00:00 2024 +0900"
        );
        assert_eq!(
            format_git_date(1_704_067_200, -5 * 3600).unwrap(),
            "Sun Dec 31 19:00:00 2023 -0500"
        );
    }

    #[test]
    fn header_lines_parse_back() {
        let mut out = String::new();
        let jane = "Jane Doe <jane@example.com>";
        let john = "John Roe <john@example.com>";
        write_header(&mut out, "abc123", jane, "Mon Jan 1 09:00:00 2024 +0900").unwrap();
        out.push('\n');
        write_header(&mut out, "def456", john, "Sun Dec 31 19:00:00 2023 -0500").unwrap();

        assert_eq!(
            out,
            "commit abc123\n\
             Author: Jane Doe <jane@example.com>\n\
             Date:   Mon Jan 1 09:00:00 2024 +0900\n\
             \n\
             commit def456\n\
             Author: John Roe <john@example.com>\n\
             Date:   Sun Dec 31 19:00:00 2023 -0500\n"
        );

        let records = crate::parse::map_history(Some(out.as_str()));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].author.as_deref(), Some("John Roe <john@example.com>"));
        assert_eq!(records[1].date.as_deref(), Some("Sun Dec 31 19:00:00 2023 -0500"));
    }

    #[test]
    fn open_outside_a_repository_is_a_discover_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GitRepo::open(Some(dir.path())),
            Err(GitgraphError::GitDiscover(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert!(matches!(
            format_git_date(0, 90_000),
            Err(GitgraphError::InvalidDate(_))
        ));
    }
}
