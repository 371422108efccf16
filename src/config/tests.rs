//! Tests for config functionality.

use crate::cli::Cli;
use crate::config::{GithubEnv, OutputMode, Settings, parse_extensions, parse_ignore};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

fn env_from(pairs: &[(&str, &str)]) -> GithubEnv {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    GithubEnv::from_lookup(|key| vars.get(key).cloned())
}

fn settings_from(args: &[&str]) -> crate::error::Result<Settings> {
    let mut argv = vec!["check-python-sources"];
    argv.extend_from_slice(args);
    Settings::from_cli(&Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_default_env() {
    let env = env_from(&[]);

    assert_eq!(env.event_path, PathBuf::from("event_payload.json"));
    assert_eq!(env.api_url, "https://api.github.com");
    assert_eq!(env.server_url, "https://github.com");
    assert_eq!(env.event_name, "push");
    assert_eq!(env.run_id, "0");
    assert!(env.repository.is_empty());
    assert!(env.token.is_none());
    assert!(env.output_file.is_none());
    assert!(!env.ci);
}

#[test]
fn test_env_reads_runner_variables() {
    let env = env_from(&[
        ("GITHUB_EVENT_PATH", "/home/runner/work/_temp/_github_workflow/event.json"),
        ("GITHUB_API_URL", "https://ghe.example.com/api/v3/"),
        ("GITHUB_REPOSITORY", "octo/widgets"),
        ("GITHUB_EVENT_NAME", "pull_request"),
        ("GITHUB_RUN_ID", "4242"),
        ("GITHUB_SHA", "b4a3ded3367cc2a7346ab74e4452bf1b51f8420f"),
        ("GITHUB_TOKEN", "ghs_secret"),
        ("GITHUB_ACTION", "lint"),
        ("GITHUB_OUTPUT", "/tmp/output"),
        ("CI", "true"),
    ]);

    assert_eq!(env.api_url, "https://ghe.example.com/api/v3");
    assert_eq!(env.repository, "octo/widgets");
    assert_eq!(env.event_name, "pull_request");
    assert_eq!(env.token.as_deref(), Some("ghs_secret"));
    assert_eq!(env.action.as_deref(), Some("lint"));
    assert_eq!(env.output_file, Some(PathBuf::from("/tmp/output")));
    assert!(env.ci);
    assert_eq!(env.run_url(), "https://github.com/octo/widgets/actions/runs/4242");
}

#[test]
fn test_token_falls_back_to_rest_api_variable() {
    let env = env_from(&[("GIT_REST_API", "fallback")]);
    assert_eq!(env.token.as_deref(), Some("fallback"));

    let env = env_from(&[("GITHUB_TOKEN", ""), ("GIT_REST_API", "fallback")]);
    assert_eq!(env.token.as_deref(), Some("fallback"));
}

#[test]
fn test_require_token() {
    assert!(env_from(&[]).require_token().is_err());
    assert_eq!(env_from(&[("GITHUB_TOKEN", "t")]).require_token().unwrap(), "t");
}

#[test]
fn test_validate_for_api() {
    assert!(env_from(&[]).validate_for_api().is_err());
    assert!(env_from(&[("GITHUB_REPOSITORY", "no-slash"), ("GITHUB_SHA", "abc")])
        .validate_for_api()
        .is_err());
    assert!(env_from(&[("GITHUB_REPOSITORY", "o/r")]).validate_for_api().is_err());
    assert!(env_from(&[("GITHUB_REPOSITORY", "o/r"), ("GITHUB_SHA", "abc")])
        .validate_for_api()
        .is_ok());
}

#[test]
fn test_default_settings() {
    let settings = settings_from(&[]).unwrap();

    assert_eq!(settings.extensions, vec!["py", "pyi"]);
    assert_eq!(settings.ignored, vec!["__pycache__"]);
    assert!(settings.not_ignored.is_empty());
    assert_eq!(settings.repo_root, PathBuf::from("."));
    assert!(!settings.lines_changed_only);
    assert!(settings.files_changed_only);
    assert_eq!(settings.output, OutputMode::Checks);
}

#[test]
fn test_lines_changed_only_requires_files_changed_only() {
    let settings = settings_from(&["--lines-changed-only", "true"]).unwrap();
    assert!(settings.lines_changed_only);

    let settings = settings_from(&[
        "--lines-changed-only",
        "true",
        "--files-changed-only",
        "false",
    ])
    .unwrap();
    assert!(!settings.lines_changed_only);
}

#[test]
fn test_review_output_implies_lines_changed_only() {
    let settings = settings_from(&["--output", "review"]).unwrap();
    assert!(settings.lines_changed_only);
    assert_eq!(settings.output, OutputMode::Review);
}

#[test]
fn test_leading_dot_extension_rejected() {
    let err = settings_from(&["--extensions", ".py"]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("leading dots"));
    assert!(msg.contains("'py'"));
}

#[test]
fn test_empty_extension_list_rejected() {
    assert!(settings_from(&["--extensions", " , "]).is_err());
}

#[test]
fn test_parse_extensions_normalizes() {
    assert_eq!(parse_extensions("PY, pyi,,"), vec!["py", "pyi"]);
}

#[test]
fn test_parse_ignore_splits_negations() {
    let (ignored, not_ignored) = parse_ignore("./build | tests/ |!tests/keep.py| ");

    assert_eq!(ignored, vec!["__pycache__", "build", "tests"]);
    assert_eq!(not_ignored, vec!["tests/keep.py"]);
}

#[test]
fn test_parse_ignore_empty_input() {
    let (ignored, not_ignored) = parse_ignore("");
    assert_eq!(ignored, vec!["__pycache__"]);
    assert!(not_ignored.is_empty());
}

#[test]
fn test_has_source_extension() {
    let settings = settings_from(&[]).unwrap();

    assert!(settings.has_source_extension("pkg/module.py"));
    assert!(settings.has_source_extension("stubs/types.PYI"));
    assert!(!settings.has_source_extension("README.md"));
    assert!(!settings.has_source_extension("Makefile"));
    assert!(!settings.has_source_extension("pkg.py/data"));
    assert!(!settings.has_source_extension(".py"));
}
