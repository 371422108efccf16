//! GitHub integration: event ingestion and the REST API.
//!
//! All REST traffic goes through the [`RestApi`] trait. [`GithubClient`] is the
//! real implementation; tests substitute an in-memory recorder.

mod client;
mod event;
pub mod types;


// Re-export public API
pub use client::{FILES_PER_PAGE, GithubClient};
pub use event::{Event, EventKind, load_event, pull_request_number, read_event_payload};
pub use types::ChangedFile;

use crate::error::Result;
use types::{CheckRun, Review};

/// The REST operations a run needs.
pub trait RestApi {
    /// All files changed by a pull request, across every page.
    fn pull_request_files(&self, number: u64) -> Result<Vec<ChangedFile>>;

    /// Files changed by a single commit.
    fn commit_files(&self, sha: &str) -> Result<Vec<ChangedFile>>;

    /// Fetch a file's contents from its `raw_url`.
    fn download_file(&self, raw_url: &str) -> Result<String>;

    /// Create a check run and return its id.
    fn create_check_run(&self, check_run: &CheckRun) -> Result<u64>;

    /// Update an existing check run; annotations are appended by GitHub.
    fn update_check_run(&self, id: u64, check_run: &CheckRun) -> Result<()>;

    /// Post a pull request review.
    fn create_review(&self, number: u64, review: &Review) -> Result<()>;
}
