//! Source file selection.
//!
//! Decides which files pylint sees:
//! - changed files from the event, filtered by extension, status and ignore lists
//! - or every source file in the repository, for full scans
//!
//! and makes sure each selected file is actually on disk.

mod filter;
mod present;
mod select;
mod walk;


// Re-export public API
pub use filter::PathFilter;
pub use present::{CHANGED_FILES_DUMP, ensure_files_present, write_changed_files_dump};
pub use select::{SourceFile, filter_changed_files};
pub use walk::{list_source_files, read_submodule_paths};
