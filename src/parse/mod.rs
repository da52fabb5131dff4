//! Text-to-structure parser for `git log` output.
//!
//! raw text → [`split_log`] → [`normalize`] per block → field extraction →
//! [`map_history`] assembles the ordered [`CommitSequence`](crate::model::CommitSequence).
//!
//! Everything here is a pure function over borrowed input; reading the log
//! text is the job of [`crate::source`].

pub mod field;
pub mod mapper;
pub mod normalize;
pub mod split;

pub use field::{extract_field, first_fragment, AUTHOR_LABEL, DATE_LABEL};
pub use mapper::{build_commit_detail, map_blocks, map_history};
pub use normalize::{is_blank, normalize, remove_blank_blocks, remove_blank_lines};
pub use split::{split_lines, split_log, split_segments, COMMIT_DELIMITER};
