//! Exit code constants for the check-python-sources action.
//!
//! Lint findings never change the exit code; they are reported through the
//! `checks-failed` step output instead.
//! - 0: Success (with or without findings)
//! - 1: User error (bad args, missing token, unreadable event payload)
//! - 2: GitHub REST API failure
//! - 3: pylint could not be run or produced unreadable output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, unreadable inputs.
pub const USER_ERROR: i32 = 1;

/// A request to the GitHub REST API failed or returned a non-2xx status.
pub const API_FAILURE: i32 = 2;

/// pylint failed to start, exited abnormally, or printed invalid JSON.
pub const LINTER_FAILURE: i32 = 3;
