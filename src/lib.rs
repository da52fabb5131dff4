//! Parse `git log` output into structured commit records for graph
//! visualization.
//!
//! ```
//! let raw = "commit abc123\nAuthor: A\nDate: D\n";
//! let commits = gitgraph::map_history(Some(raw));
//! assert_eq!(commits[0].commit.as_deref(), Some("abc123"));
//! ```

pub mod cli;
pub mod error;
pub mod git;
pub mod history;
pub mod model;
pub mod output;
pub mod parse;
pub mod source;

pub use error::{GitgraphError, Result};
pub use model::{CommitBlock, CommitRecord, CommitSequence, Field};
pub use parse::map_history;
pub use source::LogSource;
