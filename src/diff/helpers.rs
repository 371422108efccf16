//! Helper functions for hunk header parsing.

/// Marker that opens every hunk header.
pub(super) const HUNK_HEADER_PREFIX: &str = "@@ -";

/// Marker git emits in place of a trailing newline.
pub(super) const NO_NEWLINE_MARKER: char = '\\';

/// New-file half of a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NewFileSpan {
    pub start: usize,
    /// `None` when the header omits the length (`+12` instead of `+12,3`).
    pub len: Option<usize>,
}

/// Parse the new-file start and length out of a hunk header.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@[ section heading]"
///
/// Only the text between `" +"` and `" @@"` is inspected. On failure the
/// returned string describes what was wrong; the caller attaches the line.
pub(super) fn parse_new_file_span(line: &str) -> Result<NewFileSpan, String> {
    let plus = line
        .find(" +")
        .ok_or_else(|| "missing \" +\" before the new-file range".to_string())?;
    let rest = &line[plus + 2..];
    let close = rest
        .find(" @@")
        .ok_or_else(|| "missing closing \" @@\"".to_string())?;
    let span = &rest[..close];

    let (start, len) = match span.split_once(',') {
        Some((start, len)) => (start, Some(len)),
        None => (span, None),
    };

    let start = parse_number(start, "start")?;
    let len = len.map(|len| parse_number(len, "length")).transpose()?;

    Ok(NewFileSpan { start, len })
}

fn parse_number(text: &str, what: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("new-file {} {:?} is not a number", what, text))
}
