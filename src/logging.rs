//! tracing subscriber setup.
//!
//! `CHECK_PYTHON_SOURCES_LOG` takes an `EnvFilter` directive and wins over
//! `--verbosity`, which uses Python logging levels (10 debug, 20 info, ...).

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a filter directive.
pub const LOG_ENV_VAR: &str = "CHECK_PYTHON_SOURCES_LOG";

/// Map a numeric verbosity to the most detailed level that is shown.
pub fn level_for_verbosity(verbosity: u32) -> Level {
    match verbosity {
        0..=10 => Level::DEBUG,
        11..=20 => Level::INFO,
        21..=30 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Stdout is left alone because the runner parses it for workflow commands.
pub fn init_logging(verbosity: u32) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(level_for_verbosity(verbosity).as_str().to_lowercase())
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
