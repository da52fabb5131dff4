use crate::cli::CommonArgs;
use crate::output::{output_json, output_ndjson, output_table};
use crate::parse::map_history;
use anyhow::Context;
use std::io::Write;
use tracing::{info, warn};

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let source = common.source();

    // Keep spinner output away from machine-readable runs
    let raw = source
        .read(!json && !ndjson)
        .with_context(|| format!("Failed to read git log from {source}"))?;
    if raw.is_none() {
        warn!(%source, "no git log available");
    }

    let commits = map_history(raw.as_deref());
    info!(%source, commits = commits.len(), "parsed git history");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        output_json(&mut out, &commits, &source).context("Failed to write JSON output")?;
    } else if ndjson {
        output_ndjson(&mut out, &commits).context("Failed to write NDJSON output")?;
    } else {
        output_table(&mut out, &commits, &source).context("Failed to write commit table")?;
    }
    out.flush()?;

    Ok(())
}

pub fn render(common: CommonArgs) -> anyhow::Result<()> {
    let source = common.source();
    let raw = source
        .read(false)
        .with_context(|| format!("Failed to read git log from {source}"))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(text) = raw {
        out.write_all(text.as_bytes())?;
    } else {
        warn!(%source, "no git log available");
    }
    out.flush()?;
    Ok(())
}
