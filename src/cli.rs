use crate::source::{LogSource, DEFAULT_LOG_FILE};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "Parse git log output into structured commit records for graph rendering")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(
        long,
        env = "GITGRAPH_LOG_FILE",
        default_value = DEFAULT_LOG_FILE,
        conflicts_with_all = ["stdin", "repo"],
        help = "Path to a saved `git log` transcript (not combinable with --stdin or --repo)"
    )]
    pub file: PathBuf,

    #[arg(long, conflicts_with = "repo", help = "Read the log text from standard input")]
    pub stdin: bool,

    #[arg(long, help = "Render the log from the git repository at this path")]
    pub repo: Option<PathBuf>,

    #[arg(long, requires = "repo", help = "Limit the number of commits rendered from --repo")]
    pub max_count: Option<usize>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}

impl CommonArgs {
    /// `--stdin` wins over `--repo`, which wins over `--file`.
    pub fn source(&self) -> LogSource {
        if self.stdin {
            LogSource::Stdin
        } else if let Some(repo) = &self.repo {
            LogSource::Repository {
                path: Some(repo.clone()),
                max_count: self.max_count,
            }
        } else {
            LogSource::File(self.file.clone())
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the log into commit records
    Map {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, conflicts_with = "json", help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Print the raw log text of the selected source
    Render,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Map { json, ndjson } => crate::history::exec(self.common, json, ndjson),
            Commands::Render => crate::history::render(self.common),
        }
    }
}
