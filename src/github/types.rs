//! Wire types for the GitHub REST API.
//!
//! Incoming types ignore unknown fields; outgoing types skip unset optionals so
//! the same struct serves both create and update requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a files-changed listing (pull request files or commit files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path with forward slashes.
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    #[serde(default)]
    pub status: String,
    /// Unified diff hunks for this file. Absent for binary or very large diffs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
}

impl ChangedFile {
    /// Whether the change removed the file from the tree.
    pub fn is_removed(&self) -> bool {
        self.status.ends_with("removed")
    }
}

/// Body of `GET /repos/{repo}/commits/{sha}`; only the file list is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitResponse {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

/// Lifecycle state of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    InProgress,
    Completed,
}

/// Final verdict of a completed check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    Success,
    Neutral,
    Failure,
}

/// Severity of a check run annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

/// A single check run annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckAnnotation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Only allowed when `start_line == end_line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    pub annotation_level: AnnotationLevel,
    pub message: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRunOutput {
    pub title: String,
    pub summary: String,
    pub annotations: Vec<CheckAnnotation>,
}

/// Request body for creating (`POST`) or updating (`PATCH`) a check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<CheckConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub output: CheckRunOutput,
}

/// The part of a check run response the action needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRunCreated {
    pub id: u64,
}

/// A review comment addressed by diff position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewComment {
    pub path: String,
    pub position: usize,
    pub body: String,
}

/// Request body for `POST /repos/{repo}/pulls/{number}/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub commit_id: String,
    pub body: String,
    /// Always `COMMENT`: the action never approves or blocks a pull request.
    pub event: String,
    pub comments: Vec<ReviewComment>,
}
