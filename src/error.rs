//! Error types for the check-python-sources action.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::diff::MalformedPatchError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for action operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum ActionError {
    /// User provided invalid arguments or the runner environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// A patch from the files-changed listing could not be parsed.
    #[error(transparent)]
    MalformedPatch(#[from] MalformedPatchError),

    /// GitHub answered with a non-success status.
    #[error("GitHub API request to {url} failed with status {status}: {body}")]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// pylint could not be run or its output could not be read.
    #[error("pylint failed: {0}")]
    LinterError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ActionError {
    fn from(err: reqwest::Error) -> Self {
        ActionError::Http(err.to_string())
    }
}

impl ActionError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ActionError::UserError(_) => exit_codes::USER_ERROR,
            ActionError::MalformedPatch(_) => exit_codes::USER_ERROR,
            ActionError::ApiError { .. } => exit_codes::API_FAILURE,
            ActionError::Http(_) => exit_codes::API_FAILURE,
            ActionError::LinterError(_) => exit_codes::LINTER_FAILURE,
            ActionError::Io(_) => exit_codes::USER_ERROR,
            ActionError::Json(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for action operations.
pub type Result<T> = std::result::Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ActionError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn api_errors_have_correct_exit_code() {
        let err = ActionError::ApiError {
            status: 404,
            url: "https://api.github.com/repos/o/r/commits/abc".to_string(),
            body: "Not Found".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);

        let err = ActionError::Http("connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn linter_error_has_correct_exit_code() {
        let err = ActionError::LinterError("pylint not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::LINTER_FAILURE);
    }

    #[test]
    fn malformed_patch_converts_and_keeps_message() {
        let err: ActionError =
            MalformedPatchError::new(0, "@@ -1,3 +10,3", "missing \" @@\"").into();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("@@ -1,3 +10,3"));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ActionError::ApiError {
            status: 422,
            url: "https://api.github.com/repos/o/r/check-runs".to_string(),
            body: "Validation Failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GitHub API request to https://api.github.com/repos/o/r/check-runs failed with status 422: Validation Failed"
        );

        let err = ActionError::LinterError("exit code 32".to_string());
        assert_eq!(err.to_string(), "pylint failed: exit code 32");
    }
}
