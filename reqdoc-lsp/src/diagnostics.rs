use std::collections::HashSet;

use reqdoc::parser::{scan_annotations, Annotation, Occurrence, TAG_MARKER};

use crate::utils::{find_closest_annotation, is_comment_line, offset_to_line_col};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub line: usize,
    /// Byte offset in the line where the problem starts
    pub char_start: Option<usize>,
    /// Byte offset in the line where the problem ends
    pub char_end: Option<usize>,
    pub message: String,
    pub severity: DiagnosticSeverity,
}

/// Validate every `@LRD` tag in a document.
///
/// Malformed tags are errors. Unknown tag names and repeated example names or
/// enum fields within one comment block are warnings.
pub fn validate_annotations(content: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut examples = HashSet::new();
    let mut enums = HashSet::new();
    let mut previous_end = None;

    for occurrence in scan_annotations(content) {
        if let Some(end) = previous_end {
            if starts_new_block(&content[end..occurrence.span.start]) {
                examples.clear();
                enums.clear();
            }
        }
        previous_end = Some(occurrence.span.end);

        match &occurrence.result {
            Err(err) if occurrence.kind.is_none() => {
                let message = match find_closest_annotation(&occurrence.name) {
                    Some(kind) => format!(
                        "Unknown annotation '{TAG_MARKER}{}'\nhelp: did you mean '{}'?",
                        occurrence.name,
                        kind.marker()
                    ),
                    None => err.message().to_string(),
                };
                diagnostics.push(diagnostic_at(
                    content,
                    &occurrence,
                    message,
                    DiagnosticSeverity::Warning,
                ));
            }
            Err(err) => {
                diagnostics.push(diagnostic_at(
                    content,
                    &occurrence,
                    err.message().to_string(),
                    DiagnosticSeverity::Error,
                ));
            }
            Ok(Annotation::Example(entry)) => {
                if !examples.insert(entry.name.clone()) {
                    diagnostics.push(diagnostic_at(
                        content,
                        &occurrence,
                        format!(
                            "Duplicate example '{}'\nnote: the later example replaces the earlier one",
                            entry.name
                        ),
                        DiagnosticSeverity::Warning,
                    ));
                }
            }
            Ok(Annotation::Enum(entry)) => {
                if !enums.insert(entry.field.clone()) {
                    diagnostics.push(diagnostic_at(
                        content,
                        &occurrence,
                        format!(
                            "Duplicate enum field '{}'\nnote: the later definition replaces the earlier one",
                            entry.field
                        ),
                        DiagnosticSeverity::Warning,
                    ));
                }
            }
            Ok(_) => {}
        }
    }

    diagnostics
}

// Text between two tags leaves the comment block when it closes the block or
// crosses a line that is not a comment line
fn starts_new_block(between: &str) -> bool {
    between.contains("*/") || between.lines().skip(1).any(|line| !is_comment_line(line))
}

// Highlights the occurrence on the line of its marker
fn diagnostic_at(
    content: &str,
    occurrence: &Occurrence,
    message: String,
    severity: DiagnosticSeverity,
) -> Diagnostic {
    let (line, col) = offset_to_line_col(content, occurrence.span.start);
    let line_len = content[occurrence.span.start..]
        .find('\n')
        .map_or(content.len() - occurrence.span.start, |i| i);
    let span_len = occurrence.span.len().min(line_len).max(TAG_MARKER.len());

    Diagnostic {
        line,
        char_start: Some(col),
        char_end: Some(col + span_len.min(line_len)),
        message,
        severity,
    }
}
