use crate::error::{GitgraphError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// The three keys a commit record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Commit,
    Author,
    Date,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Commit => "commit",
            Field::Author => "author",
            Field::Date => "date",
        }
    }
}

/// Structured view of one commit as handed to a graph renderer.
///
/// Every key is optional. A key whose source line is missing or blank is
/// left out of the serialized form rather than written as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl CommitRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record holding a single key.
    pub fn with_field(field: Field, value: impl Into<String>) -> Self {
        let mut record = Self::default();
        record.set(field, value);
        record
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Commit => self.commit.as_deref(),
            Field::Author => self.author.as_deref(),
            Field::Date => self.date.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Commit => &mut self.commit,
            Field::Author => &mut self.author,
            Field::Date => &mut self.date,
        };
        *slot = Some(value.into());
    }

    /// Merge `other` into `self`. Keys present in `other` win; keys it
    /// omits leave `self` untouched.
    pub fn merge(mut self, other: CommitRecord) -> Self {
        if other.commit.is_some() {
            self.commit = other.commit;
        }
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.date.is_some() {
            self.date = other.date;
        }
        self
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        [&self.commit, &self.author, &self.date]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parsed history in log order (most recent first for `git log`).
pub type CommitSequence = Vec<CommitRecord>;

/// The lines of one commit, borrowed from the raw log text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> CommitBlock<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }

    /// Strict constructor for callers assembling blocks by hand.
    ///
    /// Fails when no line is non-blank, since such a block has no
    /// identifier line to map.
    pub fn try_from_lines(lines: Vec<&'a str>) -> Result<Self> {
        if lines.iter().all(|line| crate::parse::is_blank(line)) {
            return Err(GitgraphError::MalformedBlock(format!(
                "no identifier line among {} line(s)",
                lines.len()
            )));
        }
        Ok(Self { lines })
    }

    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<&'a str> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for CommitBlock<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub count: usize,
    pub commits: CommitSequence,
}
