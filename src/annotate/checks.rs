//! Posting diagnostics as a check run.

use crate::config::GithubEnv;
use crate::error::Result;
use crate::github::RestApi;
use crate::github::types::{
    AnnotationLevel, CheckAnnotation, CheckConclusion, CheckRun, CheckRunOutput, CheckStatus,
};
use crate::linter::{PylintNote, Severity};
use chrono::Utc;
use tracing::info;

/// Name of the check run shown in the pull request UI.
pub const CHECK_RUN_NAME: &str = "check-python-sources";

/// GitHub accepts at most this many annotations per request.
pub const ANNOTATIONS_PER_REQUEST: usize = 50;

pub fn annotation_level(severity: Severity) -> AnnotationLevel {
    match severity {
        Severity::Convention | Severity::Refactor | Severity::Info | Severity::Other => {
            AnnotationLevel::Notice
        }
        Severity::Warning => AnnotationLevel::Warning,
        Severity::Error | Severity::Fatal => AnnotationLevel::Failure,
    }
}

/// Translate one pylint message into a check run annotation.
///
/// Columns are converted to GitHub's 1-based numbering and only sent for
/// single-line annotations.
pub fn to_check_annotation(note: &PylintNote) -> CheckAnnotation {
    let end_line = note.last_line();
    let single_line = end_line == note.line;

    CheckAnnotation {
        path: note.path.clone(),
        start_line: note.line,
        end_line,
        start_column: single_line.then_some(note.column + 1),
        end_column: single_line.then(|| note.end_column.unwrap_or(note.column) + 1),
        annotation_level: annotation_level(note.severity),
        message: note.message.clone(),
        title: note.title(),
    }
}

/// Worst level wins; no annotations means success.
pub fn conclusion(annotations: &[CheckAnnotation]) -> CheckConclusion {
    match annotations.iter().map(|a| a.annotation_level).max() {
        None => CheckConclusion::Success,
        Some(AnnotationLevel::Failure) => CheckConclusion::Failure,
        Some(_) => CheckConclusion::Neutral,
    }
}

fn summary(annotations: &[CheckAnnotation]) -> String {
    if annotations.is_empty() {
        return "pylint found no problems.".to_string();
    }
    let mut paths: Vec<&str> = annotations.iter().map(|a| a.path.as_str()).collect();
    paths.sort_unstable();
    paths.dedup();
    format!(
        "pylint found {} problem(s) in {} file(s).",
        annotations.len(),
        paths.len()
    )
}

/// Create a check run for the analysed commit and attach every note.
///
/// The first batch of annotations creates the run; each further batch is
/// appended with an update. The last request marks the run completed.
///
/// # Returns
///
/// The id of the check run.
pub fn post_check_run(env: &GithubEnv, api: &dyn RestApi, notes: &[PylintNote]) -> Result<u64> {
    let annotations: Vec<CheckAnnotation> = notes.iter().map(to_check_annotation).collect();
    let conclusion = conclusion(&annotations);
    let summary = summary(&annotations);
    let started_at = Utc::now();

    let mut batches: Vec<&[CheckAnnotation]> =
        annotations.chunks(ANNOTATIONS_PER_REQUEST).collect();
    if batches.is_empty() {
        batches.push(&[]);
    }
    let last = batches.len() - 1;

    let mut check_run_id = 0;
    for (index, batch) in batches.into_iter().enumerate() {
        let done = index == last;
        let mut request = CheckRun {
            name: None,
            head_sha: None,
            details_url: None,
            external_id: None,
            status: if done {
                CheckStatus::Completed
            } else {
                CheckStatus::InProgress
            },
            conclusion: done.then_some(conclusion),
            started_at: None,
            completed_at: done.then(Utc::now),
            output: CheckRunOutput {
                title: CHECK_RUN_NAME.to_string(),
                summary: summary.clone(),
                annotations: batch.to_vec(),
            },
        };

        if index == 0 {
            request.name = Some(CHECK_RUN_NAME.to_string());
            request.head_sha = Some(env.sha.clone());
            request.details_url = Some(env.run_url());
            request.external_id = env.action.clone();
            request.started_at = Some(started_at);
            check_run_id = api.create_check_run(&request)?;
            info!("created check run {} with {} annotation(s)", check_run_id, batch.len());
        } else {
            api.update_check_run(check_run_id, &request)?;
            info!("updated check run {} with {} annotation(s)", check_run_id, batch.len());
        }
    }

    Ok(check_run_id)
}
