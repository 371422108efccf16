//! Command implementation for check-python-sources.
//!
//! [`run`] wires the real environment (process env, stdout, REST client,
//! pylint on `PATH`) into [`run_action`], which holds the actual sequence and
//! takes every dependency as a value so it can be driven from tests.

mod run;


pub use run::{Action, RunOutcome, run_action};

use crate::cli::Cli;
use crate::config::{GithubEnv, Settings};
use crate::error::Result;
use crate::github::GithubClient;
use crate::linter::Pylint;
use tracing::debug;

/// Run the action for parsed command line arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli)?;
    let env = GithubEnv::from_env();
    debug!("settings: {:?}", settings);

    let client = GithubClient::new(&env)?;
    let action = Action {
        settings: &settings,
        env: &env,
        api: &client,
        linter: &Pylint,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_action(&action, &mut out)?;
    debug!("run finished: {:?}", outcome);
    Ok(())
}
