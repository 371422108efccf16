//! One action run, from event to posted results.

use crate::annotate::{post_check_run, post_review, write_log_annotations};
use crate::config::{GithubEnv, OutputMode, Settings};
use crate::error::{ActionError, Result};
use crate::github::{Event, RestApi, load_event};
use crate::linter::{Linter, attribute_notes};
use crate::sources::{
    PathFilter, SourceFile, ensure_files_present, filter_changed_files, list_source_files,
    write_changed_files_dump,
};
use crate::workflow::{end_group, set_checks_failed, start_group};
use std::io::Write;
use tracing::{info, warn};

/// Everything a run depends on.
pub struct Action<'a> {
    pub settings: &'a Settings,
    pub env: &'a GithubEnv,
    pub api: &'a dyn RestApi,
    pub linter: &'a dyn Linter,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The triggering event has no changed-files listing.
    UnsupportedEvent,
    /// No file qualified for analysis.
    NoFiles,
    /// pylint ran; `problems` messages were reported.
    Linted { problems: usize },
}

impl RunOutcome {
    /// Value of the `checks-failed` step output.
    pub fn checks_failed(&self) -> bool {
        matches!(self, RunOutcome::Linted { problems } if *problems > 0)
    }
}

/// Files to analyse, plus the event they came from (if any).
struct Selection {
    event: Option<Event>,
    files: Vec<SourceFile>,
}

/// Run the action.
///
/// Workflow commands (log groups, annotations, legacy step outputs) are
/// written to `out`.
///
/// # Returns
///
/// * `Ok(RunOutcome)` - The run completed; `checks-failed` has been set
/// * `Err(ActionError)` - Invalid setup, failed REST call, or pylint failure
pub fn run_action(action: &Action, out: &mut dyn Write) -> Result<RunOutcome> {
    let Action {
        settings,
        env,
        api,
        linter,
    } = *action;
    let root = settings.repo_root.as_path();

    if !root.is_dir() {
        return Err(ActionError::UserError(format!(
            "repository root '{}' is not a directory",
            root.display()
        )));
    }
    if settings.output != OutputMode::Log {
        env.require_token()?;
    }

    log_ignore_lists(settings);
    let filter = PathFilter::new(settings)?;

    start_group(out, "Get list of specified source files")?;
    let selection = select_files(action, &filter)?;
    end_group(out)?;

    let Some(Selection { event, files }) = selection else {
        warn!(
            "the '{}' event has no list of changed files; nothing to analyse",
            env.event_name
        );
        set_checks_failed(out, env.output_file.as_deref(), false)?;
        return Ok(RunOutcome::UnsupportedEvent);
    };

    if files.is_empty() {
        info!("no source files need checking");
        set_checks_failed(out, env.output_file.as_deref(), false)?;
        return Ok(RunOutcome::NoFiles);
    }
    info!(
        "giving attention to the following files:\n\t{}",
        files
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join("\n\t")
    );

    if !env.ci {
        write_changed_files_dump(root, &files)?;
    }
    let files = ensure_files_present(root, files, api)?;

    start_group(out, "Running pylint")?;
    let notes = linter.lint(root, &files)?;
    end_group(out)?;
    let notes = attribute_notes(notes, &files);
    info!("{} problem(s) to report", notes.len());

    start_group(out, "Posting results")?;
    match settings.output {
        OutputMode::Checks => {
            post_check_run(env, api, &notes)?;
        }
        OutputMode::Log => write_log_annotations(out, &notes)?,
        OutputMode::Review => match event.as_ref().and_then(Event::pull_request_number) {
            Some(number) => post_review(api, number, &env.sha, &notes, &files)?,
            None => {
                warn!("review output needs a pull request; annotating the log instead");
                write_log_annotations(out, &notes)?;
            }
        },
    }
    end_group(out)?;

    let outcome = RunOutcome::Linted {
        problems: notes.len(),
    };
    set_checks_failed(out, env.output_file.as_deref(), outcome.checks_failed())?;
    Ok(outcome)
}

/// Pick the files to analyse.
///
/// Returns `None` when only changed files were asked for and the event
/// kind does not list any.
fn select_files(action: &Action, filter: &PathFilter) -> Result<Option<Selection>> {
    let settings = action.settings;

    if !settings.files_changed_only {
        let files = list_source_files(&settings.repo_root, settings, filter)?;
        return Ok(Some(Selection { event: None, files }));
    }

    action.env.validate_for_api()?;
    let Some(event) = load_event(action.env, action.api)? else {
        return Ok(None);
    };
    let files = filter_changed_files(event.files(), settings, filter);
    Ok(Some(Selection {
        event: Some(event),
        files,
    }))
}

fn log_ignore_lists(settings: &Settings) {
    if !settings.ignored.is_empty() {
        info!(
            "ignoring the following paths/files:\n\t./{}",
            settings.ignored.join("\n\t./")
        );
    }
    if !settings.not_ignored.is_empty() {
        info!(
            "not ignoring the following paths/files:\n\t./{}",
            settings.not_ignored.join("\n\t./")
        );
    }
}
