//! pylint's JSON message format.

use serde::{Deserialize, Serialize};

/// Message category, from the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Convention,
    Refactor,
    Info,
    Warning,
    Error,
    Fatal,
    /// A category this version does not know about.
    #[serde(other)]
    Other,
}

/// One message from `pylint --output-format=json`.
///
/// ```json
/// {
///     "type": "error",
///     "module": "basic_test",
///     "obj": "",
///     "line": 3,
///     "column": 19,
///     "endLine": null,
///     "endColumn": null,
///     "path": "tests/basic_test.py",
///     "symbol": "syntax-error",
///     "message": "invalid syntax (<unknown>, line 3)",
///     "message-id": "E0001"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PylintNote {
    #[serde(rename = "type")]
    pub severity: Severity,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub obj: String,
    pub line: usize,
    /// Zero-based, as pylint reports it.
    pub column: usize,
    #[serde(rename = "endLine", default)]
    pub end_line: Option<usize>,
    #[serde(rename = "endColumn", default)]
    pub end_column: Option<usize>,
    pub path: String,
    pub symbol: String,
    pub message: String,
    #[serde(rename = "message-id")]
    pub message_id: String,
}

impl PylintNote {
    /// `"<symbol> [<message-id>]"`, the heading used in every output mode.
    pub fn title(&self) -> String {
        format!("{} [{}]", self.symbol, self.message_id)
    }

    /// Last line the message covers; never before `line`.
    pub fn last_line(&self) -> usize {
        self.end_line.unwrap_or(self.line).max(self.line)
    }
}
