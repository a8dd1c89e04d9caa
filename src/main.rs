mod app;
mod cli;
mod config;
mod github;
mod history;
mod logging;
mod report;
mod stats;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let config = cli.into_config();
    let summary = app::run(&config, &mut io::stdout().lock()).await?;

    info!(
        fetched = summary.fetched,
        failed = summary.failed,
        "run complete"
    );
    Ok(())
}
