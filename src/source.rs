//! Where raw `git log` text comes from.
//!
//! Sources only produce text; parsing happens in [`crate::parse`].

use crate::error::Result;
use crate::git::GitRepo;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_LOG_FILE: &str = "git-log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// A saved `git log` transcript.
    File(PathBuf),
    Stdin,
    /// History of `HEAD`, rendered from the repository at `path`.
    Repository {
        path: Option<PathBuf>,
        max_count: Option<usize>,
    },
}

impl LogSource {
    /// Read the raw log text.
    ///
    /// `Ok(None)` means there is no log at all, e.g. the log file does not
    /// exist. Empty text is `Ok(Some(""))`.
    pub fn read(&self, progress: bool) -> Result<Option<String>> {
        match self {
            LogSource::File(path) => read_log_file(path),
            LogSource::Stdin => read_log_from(io::stdin().lock()).map(Some),
            LogSource::Repository { path, max_count } => {
                let repo = GitRepo::open(path.as_ref())?;
                info!(path = %repo.path().display(), "rendering log from repository");
                repo.render_log(*max_count, progress).map(Some)
            }
        }
    }
}

impl Default for LogSource {
    fn default() -> Self {
        LogSource::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::File(path) => write!(f, "{}", path.display()),
            LogSource::Stdin => f.write_str("<stdin>"),
            LogSource::Repository { path: Some(path), .. } => write!(f, "repo:{}", path.display()),
            LogSource::Repository { path: None, .. } => f.write_str("repo:."),
        }
    }
}

/// Missing file reads as `None`; any other I/O failure is an error.
pub fn read_log_file(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "log file not found, treating as no log");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn read_log_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitgraphError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_absent() {
        let dir = tempdir().unwrap();
        let text = read_log_file(&dir.path().join("git-log.txt")).unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn empty_file_is_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("git-log.txt");
        std::fs::File::create(&path).unwrap();
        assert_eq!(read_log_file(&path).unwrap(), Some(String::new()));
    }

    #[test]
    fn reads_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"commit abc\nAuthor: A\n").unwrap();

        let source = LogSource::File(path);
        assert_eq!(
            source.read(false).unwrap().as_deref(),
            Some("commit abc\nAuthor: A\n")
        );
    }

    #[test]
    fn directory_is_an_error_not_absence() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_log_file(dir.path()),
            Err(GitgraphError::Io(_))
        ));
    }

    #[test]
    fn reads_from_any_reader() {
        let text = read_log_from(std::io::Cursor::new("commit x\r\n")).unwrap();
        assert_eq!(text, "commit x\r\n");
    }

    #[test]
    fn display_names_the_source() {
        assert_eq!(LogSource::default().to_string(), DEFAULT_LOG_FILE);
        assert_eq!(LogSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            LogSource::Repository { path: None, max_count: None }.to_string(),
            "repo:."
        );
    }
}
