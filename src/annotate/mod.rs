//! Reporting pylint messages back to GitHub.
//!
//! Three destinations, selected by `--output`:
//! - check run annotations ([`post_check_run`])
//! - workflow log commands ([`write_log_annotations`])
//! - a pull request review ([`post_review`])

mod checks;
mod log;
mod review;


// Re-export public API
pub use checks::{
    ANNOTATIONS_PER_REQUEST, CHECK_RUN_NAME, annotation_level, conclusion, post_check_run,
    to_check_annotation,
};
pub use log::{escape_data, escape_property, log_command, write_log_annotations};
pub use review::{build_review, post_review};
