//! Selecting the changed files worth linting.

use super::filter::{PathFilter, normalize_path};
use crate::config::Settings;
use crate::diff::{DiffMap, map_changed_lines};
use crate::github::ChangedFile;
use serde::Serialize;
use tracing::{debug, warn};

/// A file scheduled for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Repository-relative path, used when reporting.
    pub name: String,
    /// Path handed to pylint, relative to the repository root. Differs from
    /// `name` only for files downloaded because the checkout lacked them.
    pub lint_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
    /// Changed lines, present only in lines-changed-only mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffMap>,
}

impl SourceFile {
    /// A file analysed in full.
    pub fn whole(name: impl Into<String>) -> Self {
        let name = normalize_path(&name.into());
        Self {
            lint_path: name.clone(),
            name,
            raw_url: None,
            diff: None,
        }
    }

    /// Whether a diagnostic on `line` should be reported.
    pub fn reports_line(&self, line: usize) -> bool {
        match &self.diff {
            Some(diff) => diff.contains_line(line),
            None => true,
        }
    }

    /// Diff position of `line`, when the file carries a diff.
    pub fn diff_position(&self, line: usize) -> Option<usize> {
        self.diff.as_ref().and_then(|diff| diff.position_of(line))
    }
}

/// Keep the changed files that should be linted.
///
/// A file is kept when its extension is configured, it was not removed, and
/// it is not ignored. In lines-changed-only mode:
/// - files without a patch (binary, too large) are dropped
/// - a malformed patch is logged and the file is linted in full
pub fn filter_changed_files(
    files: &[ChangedFile],
    settings: &Settings,
    filter: &PathFilter,
) -> Vec<SourceFile> {
    let mut selected = Vec::new();

    for file in files {
        let name = normalize_path(&file.filename);

        if !settings.has_source_extension(&name) {
            continue;
        }
        if file.is_removed() {
            debug!("skipping removed file {}", name);
            continue;
        }
        if filter.is_ignored(&name) {
            continue;
        }

        let mut source = SourceFile::whole(&name);
        source.raw_url = file.raw_url.clone();

        if settings.lines_changed_only {
            let Some(patch) = &file.patch else {
                debug!("skipping {}: no patch in the files listing", name);
                continue;
            };
            match map_changed_lines(patch) {
                Ok(diff) if diff.is_empty() => {
                    warn!("{} has no hunk headers in its patch; analysing the whole file", name);
                }
                Ok(diff) => source.diff = Some(diff),
                Err(e) => {
                    warn!("{}: {}; analysing the whole file", name, e);
                }
            }
        }

        selected.push(source);
    }

    selected
}
