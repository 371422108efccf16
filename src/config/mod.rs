//! Configuration model for check-python-sources.
//!
//! Two sources feed a run:
//! - [`GithubEnv`]: the variables the Actions runner exports (`GITHUB_*`)
//! - [`Settings`]: the action inputs, forwarded as command-line flags
//!
//! Both are plain values built once per run and passed down explicitly.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{GithubEnv, Settings};
pub use operations::{parse_extensions, parse_ignore};
pub use types::OutputMode;
