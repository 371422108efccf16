//! Config loading and validation.

use super::model::{GithubEnv, Settings};
use super::types::*;
use crate::cli::Cli;
use crate::error::{ActionError, Result};
use std::path::PathBuf;

impl GithubEnv {
    /// Read the runner environment of the current process.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the runner environment from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            event_path: PathBuf::from(
                get("GITHUB_EVENT_PATH").unwrap_or_else(default_event_path),
            ),
            api_url: get("GITHUB_API_URL")
                .unwrap_or_else(default_api_url)
                .trim_end_matches('/')
                .to_string(),
            repository: get("GITHUB_REPOSITORY").unwrap_or_default(),
            event_name: get("GITHUB_EVENT_NAME").unwrap_or_else(default_event_name),
            server_url: get("GITHUB_SERVER_URL")
                .unwrap_or_else(default_server_url)
                .trim_end_matches('/')
                .to_string(),
            run_id: get("GITHUB_RUN_ID").unwrap_or_else(default_run_id),
            sha: get("GITHUB_SHA").unwrap_or_default(),
            token: get("GITHUB_TOKEN").or_else(|| get("GIT_REST_API")),
            action: get("GITHUB_ACTION"),
            output_file: get("GITHUB_OUTPUT").map(PathBuf::from),
            ci: get("CI").is_some(),
        }
    }

    /// Check that the variables needed to address the REST API are present.
    pub fn validate_for_api(&self) -> Result<()> {
        if self.repository.is_empty() || !self.repository.contains('/') {
            return Err(ActionError::UserError(format!(
                "GITHUB_REPOSITORY must be set to 'owner/name' (found '{}')",
                self.repository
            )));
        }
        if self.sha.is_empty() {
            return Err(ActionError::UserError(
                "GITHUB_SHA must be set to the commit under analysis".to_string(),
            ));
        }
        Ok(())
    }

    /// The token, or a user error explaining that posting needs one.
    pub fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            ActionError::UserError(
                "the GITHUB_TOKEN is required to post results through the REST API".to_string(),
            )
        })
    }

    /// Link to the workflow run, used as a check run's `details_url`.
    pub fn run_url(&self) -> String {
        format!("{}/{}/actions/runs/{}", self.server_url, self.repository, self.run_id)
    }
}

impl Settings {
    /// Build settings from parsed command-line arguments.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Parsed and validated settings
    /// * `Err(ActionError::UserError)` - Invalid extension list
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let extensions = parse_extensions(&cli.extensions);
        let (ignored, not_ignored) = parse_ignore(cli.ignore.as_deref().unwrap_or(""));

        let settings = Self {
            extensions,
            ignored,
            not_ignored,
            repo_root: PathBuf::from(&cli.repo_root),
            // The diff is only known for files that came from the event.
            // Review comments can only be placed on changed lines.
            lines_changed_only: (cli.lines_changed_only || cli.output == OutputMode::Review)
                && cli.files_changed_only,
            files_changed_only: cli.files_changed_only,
            output: cli.output,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - at least one extension must be given
    /// - extensions must not carry leading dots
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ActionError::UserError(
                "settings validation failed: at least one file extension is required".to_string(),
            ));
        }

        for ext in &self.extensions {
            if ext.starts_with('.') {
                return Err(ActionError::UserError(format!(
                    "settings validation failed: extensions must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Whether `filename` carries one of the configured extensions.
    pub fn has_source_extension(&self, filename: &str) -> bool {
        let Some((stem, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        // A dot inside a directory name is not an extension.
        if ext.contains('/') || stem.is_empty() || stem.ends_with('/') {
            return false;
        }
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|allowed| *allowed == ext)
    }
}

/// Split a comma-separated extension list, lowercasing each entry.
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|ext| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Split the `|`-separated ignore input into (ignored, not_ignored).
///
/// Entries are relative to the repository root: leading `./` is dropped and
/// surrounding whitespace trimmed. A leading `!` moves the entry to the
/// not-ignored list. [`default_ignored_paths`] are always ignored.
pub fn parse_ignore(input: &str) -> (Vec<String>, Vec<String>) {
    let mut ignored = default_ignored_paths();
    let mut not_ignored = Vec::new();

    for entry in input.split('|') {
        let entry = entry.trim();
        let (negated, path) = match entry.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, entry),
        };
        let path = path.trim_start_matches("./").trim_end_matches('/');
        if path.is_empty() {
            continue;
        }
        if negated {
            not_ignored.push(path.to_string());
        } else {
            ignored.push(path.to_string());
        }
    }

    (ignored, not_ignored)
}
