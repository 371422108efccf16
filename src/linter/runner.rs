//! pylint subprocess runner.
//!
//! Runs pylint once over every selected file with JSON output and
//! `--exit-zero`, so a non-zero exit status means pylint itself failed
//! (bad usage, crash) rather than that it found problems.

use super::Linter;
use super::note::PylintNote;
use crate::error::{ActionError, Result};
use crate::sources::SourceFile;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// A fully built pylint invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PylintCommand {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
}

impl PylintCommand {
    /// `pylint --output-format=json --exit-zero <files...>`
    pub fn new(files: &[SourceFile]) -> Self {
        let mut args = vec!["--output-format=json".to_string(), "--exit-zero".to_string()];
        args.extend(files.iter().map(|file| file.lint_path.clone()));
        Self {
            program: "pylint".to_string(),
            args,
        }
    }

    /// The command line, for logging.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Run the command in `cwd` and parse its JSON output.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PylintNote>)` - Every message pylint printed (empty stdout = none)
    /// * `Err(ActionError::LinterError)` - pylint could not start, exited
    ///   non-zero, or printed something other than a JSON array
    pub fn run(&self, cwd: &Path) -> Result<Vec<PylintNote>> {
        debug!("running: {}", self.display());

        let output = Command::new(&self.program)
            .current_dir(cwd)
            .args(&self.args)
            .output()
            .map_err(|e| {
                ActionError::LinterError(format!(
                    "failed to execute {}: {} (is pylint installed?)",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            return Err(ActionError::LinterError(failure_message(&output)));
        }

        parse_pylint_output(&String::from_utf8_lossy(&output.stdout))
    }
}

fn failure_message(output: &Output) -> String {
    let exit_code = output.status.code().unwrap_or(-1);
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let detail = if stderr.is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr
    };
    format!("exit code {}: {}", exit_code, detail)
}

/// Parse pylint's JSON reporter output.
pub fn parse_pylint_output(stdout: &str) -> Result<Vec<PylintNote>> {
    let stdout = stdout.trim();
    if stdout.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(stdout)
        .map_err(|e| ActionError::LinterError(format!("invalid JSON output: {}", e)))
}

/// Run pylint over `files` from the repository root.
///
/// No subprocess is started when there is nothing to lint.
pub fn run_pylint(root: &Path, files: &[SourceFile]) -> Result<Vec<PylintNote>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }
    let notes = PylintCommand::new(files).run(root)?;
    debug!("pylint reported {} message(s)", notes.len());
    Ok(notes)
}

/// The real pylint, found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pylint;

impl Linter for Pylint {
    fn lint(&self, root: &Path, files: &[SourceFile]) -> Result<Vec<PylintNote>> {
        run_pylint(root, files)
    }
}
