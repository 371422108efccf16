//! Configuration types and defaults for check-python-sources.
//!
//! This module defines enums, constants, and default value functions
//! used by [`GithubEnv`](super::GithubEnv) and [`Settings`](super::Settings).

use clap::ValueEnum;

/// How diagnostics are posted back to GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Create a check run carrying the diagnostics as annotations (default).
    #[default]
    Checks,
    /// Print workflow commands so the runner annotates the log.
    Log,
    /// Post a pull request review with one comment per diagnostic.
    Review,
}

/// Paths that are always ignored, regardless of user input.
pub fn default_ignored_paths() -> Vec<String> {
    vec!["__pycache__".to_string()]
}

// Defaults for runner variables, used when running outside of GitHub Actions.
pub(crate) fn default_event_path() -> String {
    "event_payload.json".to_string()
}
pub(crate) fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
pub(crate) fn default_server_url() -> String {
    "https://github.com".to_string()
}
pub(crate) fn default_event_name() -> String {
    "push".to_string()
}
pub(crate) fn default_run_id() -> String {
    "0".to_string()
}
