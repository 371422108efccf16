//! Public types produced by the hunk mapper.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Inclusive range of new-file line numbers touched by one hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `line` falls inside this range (both ends inclusive).
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// Everything the mapper learns from one file's patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffMap {
    /// One range per hunk header, in patch order. Never merged.
    pub ranges: Vec<LineRange>,
    /// New-file line number -> zero-based index of that line in the patch text.
    pub positions: BTreeMap<usize, usize>,
}

impl DiffMap {
    /// True when the patch had no hunk headers at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `line` lies inside any hunk's range.
    pub fn contains_line(&self, line: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(line))
    }

    /// Diff position of a new-file line, if the line appears in the patch.
    pub fn position_of(&self, line: usize) -> Option<usize> {
        self.positions.get(&line).copied()
    }
}

/// A hunk header that could not be parsed.
///
/// Carries the offending line verbatim so the caller can log it next to the
/// file name before deciding how to fall back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed hunk header at patch line {line_index} ({reason}): {line:?}")]
pub struct MalformedPatchError {
    /// Zero-based index of the line within the patch text.
    pub line_index: usize,
    /// The header line as it appeared in the patch.
    pub line: String,
    pub reason: String,
}

impl MalformedPatchError {
    pub fn new(line_index: usize, line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line_index,
            line: line.into(),
            reason: reason.into(),
        }
    }
}
