//! check-python-sources: run pylint on the Python files a push or pull
//! request touched and report the diagnostics back to GitHub.
//!
//! This is the main entry point. It parses arguments, sets up logging, runs
//! the action, and maps errors to exit codes.

mod annotate;
mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod github;
pub mod linter;
mod logging;
pub mod sources;
pub mod workflow;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbosity);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
