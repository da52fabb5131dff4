mod repo;

pub use repo::{format_git_date, write_header, GitRepo};
