use crate::history::DEFAULT_LOG_FILE;
use crate::stats::RepoRef;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Everything a run needs; no process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub log_file: PathBuf,
    pub repos: Vec<RepoRef>,
}

/// Repositories tracked when none are given.
pub fn default_repos() -> Vec<RepoRef> {
    vec![
        RepoRef::new("torvalds", "linux"),
        RepoRef::new("microsoft", "vscode"),
        RepoRef::new("openai", "gpt-4"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            repos: default_repos(),
        }
    }
}
