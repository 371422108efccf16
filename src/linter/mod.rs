//! pylint integration.
//!
//! - [`run_pylint`] invokes pylint and parses its JSON messages
//! - [`attribute_notes`] maps messages back to the selected files and drops
//!   those outside the changed lines

mod note;
mod runner;


// Re-export public API
pub use note::{PylintNote, Severity};
pub use runner::{Pylint, PylintCommand, parse_pylint_output, run_pylint};

use crate::error::Result;
use crate::sources::SourceFile;
use std::path::Path;
use tracing::debug;

/// Something that produces pylint messages for a set of files.
pub trait Linter {
    /// Lint `files`, whose `lint_path`s are relative to `root`.
    fn lint(&self, root: &Path, files: &[SourceFile]) -> Result<Vec<PylintNote>>;
}

/// Attribute pylint messages to the files they belong to.
///
/// Each message's `path` is rewritten from the path pylint was given to the
/// file's repository path. Messages on lines outside a file's changed ranges
/// are dropped. Messages for paths that were not selected are kept unchanged.
pub fn attribute_notes(notes: Vec<PylintNote>, files: &[SourceFile]) -> Vec<PylintNote> {
    notes
        .into_iter()
        .filter_map(|mut note| {
            let lint_path = note.path.replace('\\', "/");
            let Some(file) = files.iter().find(|f| f.lint_path == lint_path) else {
                return Some(note);
            };
            if !file.reports_line(note.line) {
                debug!(
                    "dropping {} on {}:{} (outside changed lines)",
                    note.symbol, file.name, note.line
                );
                return None;
            }
            note.path = file.name.clone();
            Some(note)
        })
        .collect()
}
