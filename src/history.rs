//! Append-only text log of fetch results.
//!
//! Each call adds one block:
//!
//! ```text
//! --- 2024-01-01 12:00:00.000000 ---
//! linux - stars:100 | forks:10
//! ```
//!
//! Existing content is never rewritten. Blocks after the first are preceded
//! by a blank line.

use crate::stats::RepositoryStats;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_LOG_FILE: &str = "github_log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn append(path: &Path, records: &[RepositoryStats], at: NaiveDateTime) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let has_content = file
        .metadata()
        .with_context(|| format!("Failed to stat log file {}", path.display()))?
        .len()
        > 0;

    let mut w = BufWriter::new(file);
    write_block(&mut w, records, at, has_content)
        .and_then(|()| w.flush())
        .with_context(|| format!("Failed to write log file {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "appended history block");
    Ok(())
}

fn write_block<W: Write>(
    w: &mut W,
    records: &[RepositoryStats],
    at: NaiveDateTime,
    leading_blank: bool,
) -> std::io::Result<()> {
    if leading_blank {
        writeln!(w)?;
    }
    writeln!(w, "--- {} ---", at.format(TIMESTAMP_FORMAT))?;
    for s in records {
        writeln!(w, "{} - stars:{} | forks:{}", s.name, s.stars, s.forks)?;
    }
    Ok(())
}
