//! Blocking REST client for the GitHub API.

use super::RestApi;
use super::types::{ChangedFile, CheckRun, CheckRunCreated, CommitResponse, Review};
use crate::config::GithubEnv;
use crate::error::{ActionError, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

const USER_AGENT: &str = concat!("check-python-sources/", env!("CARGO_PKG_VERSION"));
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Maximum page size GitHub accepts for file listings.
pub const FILES_PER_PAGE: usize = 100;

/// REST client bound to one repository.
pub struct GithubClient {
    http: Client,
    api_url: String,
    repository: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client for the repository named in the runner environment.
    pub fn new(env: &GithubEnv) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_url: env.api_url.clone(),
            repository: env.repository.clone(),
            token: env.token.clone(),
        })
    }

    /// Absolute URL of a path below `/repos/{owner}/{name}/`.
    pub fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.repository, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, ACCEPT_JSON);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("token {}", token)),
            None => request,
        }
    }

    /// Send a request and turn non-2xx statuses into [`ActionError::ApiError`].
    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = self.authorize(request).send()?;
        let status = response.status();
        debug!("{} answered {}", url, status);

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(ActionError::ApiError {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            })
        }
    }
}

impl RestApi for GithubClient {
    fn pull_request_files(&self, number: u64) -> Result<Vec<ChangedFile>> {
        let mut files = Vec::new();

        for page in 1.. {
            let url = self.repo_url(&format!(
                "pulls/{}/files?per_page={}&page={}",
                number, FILES_PER_PAGE, page
            ));
            let batch: Vec<ChangedFile> = self.send(self.http.get(&url), &url)?.json()?;
            let last_page = batch.len() < FILES_PER_PAGE;
            files.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(files)
    }

    fn commit_files(&self, sha: &str) -> Result<Vec<ChangedFile>> {
        let url = self.repo_url(&format!("commits/{}", sha));
        let commit: CommitResponse = self.send(self.http.get(&url), &url)?.json()?;
        Ok(commit.files)
    }

    fn download_file(&self, raw_url: &str) -> Result<String> {
        Ok(self.send(self.http.get(raw_url), raw_url)?.text()?)
    }

    fn create_check_run(&self, check_run: &CheckRun) -> Result<u64> {
        let url = self.repo_url("check-runs");
        let created: CheckRunCreated = self
            .send(self.http.post(&url).json(check_run), &url)?
            .json()?;
        Ok(created.id)
    }

    fn update_check_run(&self, id: u64, check_run: &CheckRun) -> Result<()> {
        let url = self.repo_url(&format!("check-runs/{}", id));
        self.send(self.http.patch(&url).json(check_run), &url)?;
        Ok(())
    }

    fn create_review(&self, number: u64, review: &Review) -> Result<()> {
        let url = self.repo_url(&format!("pulls/{}/reviews", number));
        self.send(self.http.post(&url).json(review), &url)?;
        Ok(())
    }
}
