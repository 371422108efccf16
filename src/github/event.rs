//! Event ingestion.
//!
//! The runner names the triggering event in `GITHUB_EVENT_NAME` and writes its
//! payload to `GITHUB_EVENT_PATH`. Push and pull request events list their
//! changed files through different endpoints with different response shapes;
//! both are resolved here into one [`Event`] so later stages only ever see a
//! list of [`ChangedFile`]s.

use super::RestApi;
use super::types::ChangedFile;
use crate::config::GithubEnv;
use crate::error::{ActionError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Event kinds the action knows how to fetch files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
}

impl EventKind {
    /// Parse a `GITHUB_EVENT_NAME` value. Returns `None` for unsupported events.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "push" => Some(Self::Push),
            "pull_request" | "pull_request_target" => Some(Self::PullRequest),
            _ => None,
        }
    }
}

/// A triggering event together with the files it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Push {
        sha: String,
        files: Vec<ChangedFile>,
    },
    PullRequest {
        number: u64,
        files: Vec<ChangedFile>,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Push { .. } => EventKind::Push,
            Event::PullRequest { .. } => EventKind::PullRequest,
        }
    }

    /// The changed files, whatever the event kind.
    pub fn files(&self) -> &[ChangedFile] {
        match self {
            Event::Push { files, .. } | Event::PullRequest { files, .. } => files,
        }
    }

    /// The pull request number, for events that have one.
    pub fn pull_request_number(&self) -> Option<u64> {
        match self {
            Event::PullRequest { number, .. } => Some(*number),
            Event::Push { .. } => None,
        }
    }
}

/// Read and parse the event payload file.
pub fn read_event_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ActionError::UserError(format!(
            "failed to read event payload '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ActionError::UserError(format!(
            "failed to parse event payload '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Extract the pull request number from a `pull_request` event payload.
pub fn pull_request_number(payload: &Value) -> Result<u64> {
    payload
        .get("number")
        .or_else(|| payload.get("pull_request").and_then(|pr| pr.get("number")))
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            ActionError::UserError("event payload has no pull request number".to_string())
        })
}

/// Resolve the triggering event and fetch its changed files.
///
/// # Returns
///
/// * `Ok(Some(Event))` - A supported event with its files
/// * `Ok(None)` - The event kind is not supported; nothing to analyse
/// * `Err(_)` - Unreadable payload or failed REST call
pub fn load_event(env: &GithubEnv, api: &dyn RestApi) -> Result<Option<Event>> {
    let Some(kind) = EventKind::parse(&env.event_name) else {
        return Ok(None);
    };
    info!("processing {} event", env.event_name);

    let event = match kind {
        EventKind::Push => {
            info!("fetching files changed by commit {}", env.sha);
            Event::Push {
                sha: env.sha.clone(),
                files: api.commit_files(&env.sha)?,
            }
        }
        EventKind::PullRequest => {
            let payload = read_event_payload(&env.event_path)?;
            debug!("event payload: {}", payload);
            let number = pull_request_number(&payload)?;
            info!("fetching files changed by pull request #{}", number);
            Event::PullRequest {
                number,
                files: api.pull_request_files(number)?,
            }
        }
    };

    debug!("{} changed file(s) listed", event.files().len());
    Ok(Some(event))
}
