use crate::error::Result;
use crate::model::{CommitRecord, HistoryOutput, SCHEMA_VERSION};
use crate::source::LogSource;
use chrono::Utc;
use console::style;
use std::io::Write;

const SHORT_ID_LEN: usize = 12;
const MISSING: &str = "-";

pub fn history_output(commits: &[CommitRecord], source: &LogSource) -> HistoryOutput {
    HistoryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        count: commits.len(),
        commits: commits.to_vec(),
    }
}

pub fn output_json<W: Write>(out: &mut W, commits: &[CommitRecord], source: &LogSource) -> Result<()> {
    let output = history_output(commits, source);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

pub fn output_ndjson<W: Write>(out: &mut W, commits: &[CommitRecord]) -> Result<()> {
    for record in commits {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn output_table<W: Write>(out: &mut W, commits: &[CommitRecord], source: &LogSource) -> Result<()> {
    if commits.is_empty() {
        writeln!(out, "No commits found in {source}")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<14} {:<40} {}",
        style("Commit").bold(),
        style("Author").bold(),
        style("Date").bold()
    )?;
    writeln!(out, "{}", "─".repeat(90))?;

    for record in commits {
        let id = record
            .commit
            .as_deref()
            .map(|c| c.chars().take(SHORT_ID_LEN).collect::<String>())
            .unwrap_or_else(|| MISSING.to_string());
        writeln!(
            out,
            "{:<14} {:<40} {}",
            style(id).yellow(),
            record.author.as_deref().unwrap_or(MISSING),
            style(record.date.as_deref().unwrap_or(MISSING)).dim()
        )?;
    }

    let partial = commits.iter().filter(|r| r.len() < 3).count();
    writeln!(out, "\nTotal commits: {}", style(commits.len()).cyan())?;
    if partial > 0 {
        writeln!(out, "Records with missing fields: {}", style(partial).red())?;
    }
    Ok(())
}
