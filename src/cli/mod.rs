//! CLI argument parsing for check-python-sources.
//!
//! Uses clap derive macros for declarative argument definitions. The action's
//! `action.yml` forwards its inputs as these flags, so boolean options take an
//! explicit `true`/`false` value instead of acting as switches.

use crate::config::OutputMode;
use clap::{ArgAction, Parser};
use std::convert::Infallible;

/// Run pylint on the Python sources changed by a push or pull request and
/// post the diagnostics back to GitHub.
#[derive(Parser, Debug)]
#[command(name = "check-python-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging level as a Python-style number (10 debug, 20 info, 30 warning, 40 error).
    #[arg(short, long, default_value_t = 20)]
    pub verbosity: u32,

    /// Comma-separated file extensions to analyse (no leading dots).
    #[arg(short, long, default_value = "py,pyi")]
    pub extensions: String,

    /// Repository root, relative to the runner's working directory.
    #[arg(short, long, default_value = ".")]
    pub repo_root: String,

    /// Paths to ignore, separated by '|'. Prefix a path with '!' to explicitly include it.
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Only report diagnostics on lines touched by the event's diff.
    #[arg(long, default_value_t = false, action = ArgAction::Set, value_parser = parse_input_bool)]
    pub lines_changed_only: bool,

    /// Only analyse files changed by the event; 'false' analyses every source file.
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_parser = parse_input_bool)]
    pub files_changed_only: bool,

    /// Where to post the diagnostics.
    #[arg(long, value_enum, default_value_t = OutputMode::Checks)]
    pub output: OutputMode,
}

/// Action inputs are strings; only a case-insensitive `true` is true.
fn parse_input_bool(value: &str) -> Result<bool, Infallible> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["check-python-sources"]).unwrap();
        assert_eq!(cli.verbosity, 20);
        assert_eq!(cli.extensions, "py,pyi");
        assert_eq!(cli.repo_root, ".");
        assert_eq!(cli.ignore, None);
        assert!(!cli.lines_changed_only);
        assert!(cli.files_changed_only);
        assert_eq!(cli.output, OutputMode::Checks);
    }

    #[test]
    fn parse_action_inputs() {
        let cli = Cli::try_parse_from([
            "check-python-sources",
            "--verbosity",
            "10",
            "--extensions",
            "py",
            "--repo-root",
            "src",
            "--ignore",
            "tests|!tests/keep.py",
            "--lines-changed-only",
            "true",
            "--files-changed-only",
            "false",
            "--output",
            "log",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 10);
        assert_eq!(cli.extensions, "py");
        assert_eq!(cli.repo_root, "src");
        assert_eq!(cli.ignore.as_deref(), Some("tests|!tests/keep.py"));
        assert!(cli.lines_changed_only);
        assert!(!cli.files_changed_only);
        assert_eq!(cli.output, OutputMode::Log);
    }

    #[test]
    fn parse_short_flags() {
        let cli =
            Cli::try_parse_from(["check-python-sources", "-v", "30", "-e", "pyi", "-i", "docs"])
                .unwrap();
        assert_eq!(cli.verbosity, 30);
        assert_eq!(cli.extensions, "pyi");
        assert_eq!(cli.ignore.as_deref(), Some("docs"));
    }

    #[test]
    fn parse_review_output() {
        let cli = Cli::try_parse_from(["check-python-sources", "--output", "review"]).unwrap();
        assert_eq!(cli.output, OutputMode::Review);
    }

    #[test]
    fn reject_unknown_output() {
        assert!(Cli::try_parse_from(["check-python-sources", "--output", "email"]).is_err());
    }

    #[test]
    fn bool_inputs_ignore_case() {
        let cli = Cli::try_parse_from([
            "check-python-sources",
            "--lines-changed-only",
            "True",
            "--files-changed-only",
            "FALSE",
        ])
        .unwrap();
        assert!(cli.lines_changed_only);
        assert!(!cli.files_changed_only);
    }

    #[test]
    fn bool_inputs_other_than_true_are_false() {
        let cli = Cli::try_parse_from(["check-python-sources", "--files-changed-only", "yes"])
            .unwrap();
        assert!(!cli.files_changed_only);
    }
}
