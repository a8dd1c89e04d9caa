use crate::config::Config;
use crate::github::GithubClient;
use crate::history;
use crate::report;
use crate::stats::{RepositoryStats, TrackedRepo};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub failed: usize,
}

/// Fetch every configured repository, then log and report whatever succeeded.
///
/// Status and network failures are printed and skipped. A response that does
/// not have the expected shape, or a log file that cannot be written, ends
/// the run with an error.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let client = GithubClient::new(&config.api_base)?;
    let mut tracked = Vec::with_capacity(config.repos.len());
    let mut summary = RunSummary::default();

    for repo in &config.repos {
        match client.repo_stats(repo).await {
            Ok(stats) => {
                info!(
                    %repo,
                    stars = stats.stars,
                    description = ?stats.description,
                    "fetched repository"
                );
                tracked.push(TrackedRepo {
                    repo: repo.clone(),
                    stats,
                });
                summary.fetched += 1;
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                debug!(%repo, error = %err, "skipping repository");
                writeln!(out, "❌ Failed to fetch data: {err}")?;
                summary.failed += 1;
            }
        }
    }

    if tracked.is_empty() {
        return Ok(summary);
    }

    let records: Vec<RepositoryStats> = tracked.iter().map(|t| t.stats.clone()).collect();
    history::append(&config.log_file, &records, Local::now().naive_local())?;

    report::report(out, &tracked).context("Failed to write report")?;
    writeln!(out, "\n✅ Data logged successfully!")?;

    Ok(summary)
}
