//! GitHub Actions workflow commands.
//!
//! Everything here writes to the step's stdout (or the `GITHUB_OUTPUT` file),
//! which the runner parses:
//! - `::group::<title>` / `::endgroup::` fold log sections
//! - step outputs are appended to `GITHUB_OUTPUT` as `name=value` lines

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Name of the step output telling later steps whether problems were found.
pub const CHECKS_FAILED_OUTPUT: &str = "checks-failed";

/// Open a collapsible log group.
pub fn start_group(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "::group::{}", title)?;
    out.flush()
}

/// Close the innermost log group.
pub fn end_group(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "::endgroup::")?;
    out.flush()
}

/// Set a step output.
///
/// Appended to `output_file` when the runner provides one; older runners
/// only understand the deprecated `set-output` command on stdout.
pub fn set_output(
    out: &mut dyn Write,
    output_file: Option<&Path>,
    name: &str,
    value: &str,
) -> Result<()> {
    match output_file {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", name, value)?;
            debug!("wrote {}={} to {}", name, value, path.display());
        }
        None => {
            writeln!(out, "::set-output name={}::{}", name, value)?;
        }
    }
    Ok(())
}

/// Set `checks-failed` to `1` when problems remain, `0` otherwise.
pub fn set_checks_failed(
    out: &mut dyn Write,
    output_file: Option<&Path>,
    failed: bool,
) -> Result<()> {
    let value = if failed { "1" } else { "0" };
    set_output(out, output_file, CHECKS_FAILED_OUTPUT, value)
}
