//! Diff hunk mapping for changed-lines-only analysis.
//!
//! GitHub's files-changed listings carry a `patch` field per file: the bare
//! hunk bodies of a unified diff, without `diff --git` or `---`/`+++` headers.
//! This module turns that text into:
//! - one [`LineRange`] per hunk (new-file lines touched by the hunk)
//! - a map from new-file line number to diff position, which is what the
//!   pull request review API addresses comments by
//!
//! The mapper is pure: it performs no I/O and keeps no state between calls.

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{DiffMap, LineRange, MalformedPatchError};
pub use parser::map_changed_lines;
