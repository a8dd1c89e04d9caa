use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_LEVEL: &str = "warn";

/// Parse a filter directive, falling back to [`DEFAULT_LEVEL`] when it is malformed.
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .with_context(|| format!("invalid log level `{level}`"))
}

/// Install the stderr subscriber. stdout carries the report.
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .context("failed to install tracing subscriber")
}
