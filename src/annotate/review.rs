//! Posting diagnostics as a pull request review.

use crate::error::Result;
use crate::github::RestApi;
use crate::github::types::{Review, ReviewComment};
use crate::linter::PylintNote;
use crate::sources::SourceFile;
use tracing::{debug, info};

fn comment_body(note: &PylintNote) -> String {
    format!("**{}**: {}", note.title(), note.message)
}

/// Build a `COMMENT` review with one comment per positioned note.
///
/// Notes whose line has no diff position (or whose file is unknown) cannot
/// be placed in the review and are skipped.
pub fn build_review(commit_id: &str, notes: &[PylintNote], files: &[SourceFile]) -> Review {
    let mut comments = Vec::new();

    for note in notes {
        let position = files
            .iter()
            .find(|file| file.name == note.path)
            .and_then(|file| file.diff_position(note.line));
        let Some(position) = position else {
            debug!("no diff position for {}:{}; not commenting", note.path, note.line);
            continue;
        };
        comments.push(ReviewComment {
            path: note.path.clone(),
            position,
            body: comment_body(note),
        });
    }

    let body = if notes.is_empty() {
        "pylint found no problems in the changed lines.".to_string()
    } else {
        format!("pylint found {} problem(s).", notes.len())
    };

    Review {
        commit_id: commit_id.to_string(),
        body,
        event: "COMMENT".to_string(),
        comments,
    }
}

/// Post the review on pull request `number`.
pub fn post_review(
    api: &dyn RestApi,
    number: u64,
    commit_id: &str,
    notes: &[PylintNote],
    files: &[SourceFile],
) -> Result<()> {
    let review = build_review(commit_id, notes, files);
    let count = review.comments.len();
    api.create_review(number, &review)?;
    info!("posted review on #{} with {} comment(s)", number, count);
    Ok(())
}
