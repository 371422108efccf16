//! Annotating the workflow log through workflow commands.

use super::checks::annotation_level;
use crate::github::types::AnnotationLevel;
use crate::linter::PylintNote;
use std::io::Write;

/// Workflow command name for an annotation level.
fn command_name(level: AnnotationLevel) -> &'static str {
    match level {
        AnnotationLevel::Notice => "notice",
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Failure => "error",
    }
}

/// Escape a workflow command's message.
pub fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

/// Format one note as `::<level> file=..,line=..::<message>`.
pub fn log_command(note: &PylintNote) -> String {
    let end_line = note.last_line();
    let mut properties = vec![
        format!("file={}", escape_property(&note.path)),
        format!("line={}", note.line),
        format!("endLine={}", end_line),
    ];
    if end_line == note.line {
        properties.push(format!("col={}", note.column + 1));
        if let Some(end_column) = note.end_column {
            properties.push(format!("endColumn={}", end_column + 1));
        }
    }
    properties.push(format!("title={}", escape_property(&note.title())));

    format!(
        "::{} {}::{}",
        command_name(annotation_level(note.severity)),
        properties.join(","),
        escape_data(&note.message)
    )
}

/// Print one workflow command per note.
pub fn write_log_annotations(out: &mut dyn Write, notes: &[PylintNote]) -> std::io::Result<()> {
    for note in notes {
        writeln!(out, "{}", log_command(note))?;
    }
    Ok(())
}
