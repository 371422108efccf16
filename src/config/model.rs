//! Config struct definitions.

use super::types::OutputMode;
use std::path::PathBuf;

/// The GitHub Actions runner environment.
///
/// Every field comes from a `GITHUB_*` (or related) variable. Defaults match a
/// local, non-CI invocation so the action can be exercised from a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubEnv {
    /// Path to the JSON payload of the triggering event (`GITHUB_EVENT_PATH`).
    pub event_path: PathBuf,

    /// Base URL of the REST API (`GITHUB_API_URL`).
    pub api_url: String,

    /// `owner/name` of the repository (`GITHUB_REPOSITORY`).
    pub repository: String,

    /// Name of the triggering event, e.g. `push` or `pull_request` (`GITHUB_EVENT_NAME`).
    pub event_name: String,

    /// Base URL of the web UI (`GITHUB_SERVER_URL`).
    pub server_url: String,

    /// Workflow run identifier (`GITHUB_RUN_ID`).
    pub run_id: String,

    /// Commit the workflow runs on (`GITHUB_SHA`).
    pub sha: String,

    /// REST API token (`GITHUB_TOKEN`, falling back to `GIT_REST_API`).
    pub token: Option<String>,

    /// Step identifier, used as the check run's external id (`GITHUB_ACTION`).
    pub action: Option<String>,

    /// File that receives step outputs (`GITHUB_OUTPUT`).
    pub output_file: Option<PathBuf>,

    /// Whether the process runs on a CI runner (`CI`).
    pub ci: bool,
}

/// User-facing settings, derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lowercased extensions without leading dots.
    pub extensions: Vec<String>,

    /// Paths (or glob patterns) to skip.
    pub ignored: Vec<String>,

    /// Paths that stay included even when an `ignored` entry covers them.
    pub not_ignored: Vec<String>,

    /// Repository root the analysis runs in.
    pub repo_root: PathBuf,

    /// Restrict diagnostics to lines touched by the diff.
    pub lines_changed_only: bool,

    /// Analyse only the files changed by the event.
    pub files_changed_only: bool,

    /// Where diagnostics are posted.
    pub output: OutputMode,
}
