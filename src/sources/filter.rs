//! Ignore/include path matching.
//!
//! An entry matches a path when it names the path itself or any parent
//! directory of it. Entries may also be glob patterns (`**/migrations`,
//! `*_pb2.py`). Explicit includes (`!path`) win over ignores.

use crate::config::Settings;
use crate::error::{ActionError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

/// Compiled ignore and include lists.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignored: GlobSet,
    ignored_patterns: Vec<String>,
    not_ignored: GlobSet,
    not_ignored_patterns: Vec<String>,
}

impl PathFilter {
    /// Compile the ignore lists from settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::from_lists(&settings.ignored, &settings.not_ignored)
    }

    pub fn from_lists(ignored: &[String], not_ignored: &[String]) -> Result<Self> {
        Ok(Self {
            ignored: build_glob_set(ignored)?,
            ignored_patterns: ignored.to_vec(),
            not_ignored: build_glob_set(not_ignored)?,
            not_ignored_patterns: not_ignored.to_vec(),
        })
    }

    /// Add more ignored entries (e.g. submodule paths discovered later).
    pub fn with_extra_ignored(&self, extra: &[String]) -> Result<Self> {
        if extra.is_empty() {
            return Ok(self.clone());
        }
        let mut ignored = self.ignored_patterns.clone();
        ignored.extend(extra.iter().cloned());
        Self::from_lists(&ignored, &self.not_ignored_patterns)
    }

    /// Whether `path` (repo-relative) should be skipped.
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = normalize_path(path);

        if !self.ignored.is_match(&path) {
            return false;
        }
        if self.not_ignored.is_match(&path) {
            debug!("\"./{}\" is not ignored as explicitly included", path);
            return false;
        }
        debug!("\"./{}\" is ignored", path);
        true
    }
}

/// Each entry matches itself and everything below it.
fn build_glob_set(entries: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for entry in entries {
        let entry = normalize_path(entry);
        let entry = entry.trim_end_matches('/');
        for pattern in [entry.to_string(), format!("{}/**", entry)] {
            let glob = Glob::new(&pattern).map_err(|e| {
                ActionError::UserError(format!("invalid ignore pattern '{}': {}", entry, e))
            })?;
            builder.add(glob);
        }
    }

    builder
        .build()
        .map_err(|e| ActionError::UserError(format!("failed to compile ignore patterns: {}", e)))
}

/// Normalize a file path to use forward slashes without a leading `./`.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_start_matches("./").to_string()
}
