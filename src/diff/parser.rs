//! Core hunk mapping logic.

use super::api::{DiffMap, LineRange, MalformedPatchError};
use super::helpers::{HUNK_HEADER_PREFIX, NO_NEWLINE_MARKER, parse_new_file_span};

/// Map a file's patch text to changed line ranges and diff positions.
///
/// Every line of the patch, hunk headers and deletions included, occupies one
/// diff position. Context and added lines are recorded against the new-file
/// line number they land on; deleted lines have no new-file line and are
/// never recorded.
///
/// # Arguments
///
/// * `patch` - The `patch` field of one entry in a GitHub files-changed listing
///
/// # Returns
///
/// * `Ok(DiffMap)` - One range per hunk plus the position map. A patch without
///   any hunk header yields an empty map.
/// * `Err(MalformedPatchError)` - A hunk header did not parse
pub fn map_changed_lines(patch: &str) -> Result<DiffMap, MalformedPatchError> {
    let mut map = DiffMap::default();
    let mut new_line: usize = 0; // Cursor in the new file
    let mut header = (0, ""); // Hunk header the cursor came from

    for (diff_index, line) in patch.lines().enumerate() {
        if line.starts_with(HUNK_HEADER_PREFIX) {
            let span = parse_new_file_span(line)
                .map_err(|reason| MalformedPatchError::new(diff_index, line, reason))?;
            // Without a length the hunk covers a single line.
            let end = span
                .start
                .checked_add(span.len.unwrap_or(0))
                .ok_or_else(|| overflow(diff_index, line))?;
            map.ranges.push(LineRange::new(span.start, end));
            new_line = span.start;
            header = (diff_index, line);
            continue;
        }

        // Text before the first hunk header has no new-file line number.
        let Some(range) = map.ranges.last_mut() else {
            continue;
        };

        if line.starts_with('-') || line.starts_with(NO_NEWLINE_MARKER) {
            continue;
        }

        map.positions.insert(new_line, diff_index);
        range.end = new_line;
        new_line = new_line
            .checked_add(1)
            .ok_or_else(|| overflow(header.0, header.1))?;
    }

    Ok(map)
}

fn overflow(diff_index: usize, line: &str) -> MalformedPatchError {
    MalformedPatchError::new(diff_index, line, "new-file range overflows")
}
