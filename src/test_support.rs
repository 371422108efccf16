use crate::config::GithubEnv;
use crate::error::{ActionError, Result};
use crate::github::RestApi;
use crate::github::types::{ChangedFile, CheckRun, Review};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a scratch checkout containing `files` (path, contents).
pub(crate) fn create_source_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (path, contents) in files {
        let full = temp_dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, contents).unwrap();
    }
    temp_dir
}

/// A runner environment pointing at a fake repository.
pub(crate) fn test_env(event_name: &str, event_path: &Path) -> GithubEnv {
    let event_path = event_path.to_string_lossy().to_string();
    let vars: HashMap<&str, String> = [
        ("GITHUB_EVENT_PATH", event_path),
        ("GITHUB_REPOSITORY", "octo/widgets".to_string()),
        ("GITHUB_EVENT_NAME", event_name.to_string()),
        ("GITHUB_RUN_ID", "77".to_string()),
        ("GITHUB_SHA", "0123456789abcdef".to_string()),
        ("GITHUB_TOKEN", "token".to_string()),
        ("GITHUB_ACTION", "lint".to_string()),
        ("CI", "true".to_string()),
    ]
    .into_iter()
    .collect();
    GithubEnv::from_lookup(|key| vars.get(key).cloned())
}

pub(crate) fn changed_file(filename: &str, status: &str, patch: Option<&str>) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        status: status.to_string(),
        patch: patch.map(str::to_string),
        raw_url: Some(format!("https://github.com/octo/widgets/raw/0123456789abcdef/{}", filename)),
    }
}

/// Every call a [`FakeApi`] received, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    PullRequestFiles(u64),
    CommitFiles(String),
    Download(String),
    CreateCheckRun(CheckRun),
    UpdateCheckRun(u64, CheckRun),
    CreateReview(u64, Review),
}

/// In-memory [`RestApi`] that serves canned files and records requests.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub files: Vec<ChangedFile>,
    pub downloads: HashMap<String, String>,
    pub check_run_id: u64,
    pub calls: RefCell<Vec<ApiCall>>,
}

impl FakeApi {
    pub(crate) fn with_files(files: Vec<ChangedFile>) -> Self {
        Self {
            files,
            check_run_id: 99,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl RestApi for FakeApi {
    fn pull_request_files(&self, number: u64) -> Result<Vec<ChangedFile>> {
        self.record(ApiCall::PullRequestFiles(number));
        Ok(self.files.clone())
    }

    fn commit_files(&self, sha: &str) -> Result<Vec<ChangedFile>> {
        self.record(ApiCall::CommitFiles(sha.to_string()));
        Ok(self.files.clone())
    }

    fn download_file(&self, raw_url: &str) -> Result<String> {
        self.record(ApiCall::Download(raw_url.to_string()));
        self.downloads
            .get(raw_url)
            .cloned()
            .ok_or_else(|| ActionError::ApiError {
                status: 404,
                url: raw_url.to_string(),
                body: "Not Found".to_string(),
            })
    }

    fn create_check_run(&self, check_run: &CheckRun) -> Result<u64> {
        self.record(ApiCall::CreateCheckRun(check_run.clone()));
        Ok(self.check_run_id)
    }

    fn update_check_run(&self, id: u64, check_run: &CheckRun) -> Result<()> {
        self.record(ApiCall::UpdateCheckRun(id, check_run.clone()));
        Ok(())
    }

    fn create_review(&self, number: u64, review: &Review) -> Result<()> {
        self.record(ApiCall::CreateReview(number, review.clone()));
        Ok(())
    }
}
