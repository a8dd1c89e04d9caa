use crate::config::{Config, DEFAULT_API_BASE, default_repos};
use crate::history::DEFAULT_LOG_FILE;
use crate::logging;
use crate::stats::RepoRef;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-tracker",
    version,
    about = "Fetch GitHub repository stats, print a summary and append them to a log file"
)]
pub struct Cli {
    /// Repositories to track as `owner/name`. Defaults to torvalds/linux,
    /// microsoft/vscode and openai/gpt-4.
    #[arg(value_name = "OWNER/NAME")]
    pub repos: Vec<RepoRef>,

    /// File the timestamped results are appended to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Base URL of the REST API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Tracing filter for diagnostics on stderr (e.g. `debug`, `repo_tracker=info`)
    #[arg(long, env = "REPO_TRACKER_LOG", default_value = logging::DEFAULT_LEVEL)]
    pub log_level: String,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let repos = if self.repos.is_empty() {
            default_repos()
        } else {
            self.repos
        };

        Config {
            api_base: self.api_base,
            log_file: self.log_file,
            repos,
        }
    }
}
