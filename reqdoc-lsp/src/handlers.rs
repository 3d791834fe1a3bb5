use once_cell::sync::Lazy;
use regex::Regex;
use reqdoc::parser::{is_valid_status, TagKind, TAG_MARKER};
use tower_lsp::lsp_types::*;

use crate::completion;
use crate::diagnostics;
use crate::utils::{byte_index_to_utf16_col, is_comment_line, utf16_pos_to_byte_index};

static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@LRD[A-Za-z]*").unwrap());
static STATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@LRD(?:response|error)[ \t]+(\d+)").unwrap());

/// Handle completion request for a text document
///
/// # Returns
/// Completion suggestions if available
pub fn text_document_completion(content: &str, position: Position) -> Option<CompletionResponse> {
    let pos = completion::Position {
        line: position.line as usize,
        character: position.character as usize,
    };

    let items = completion::get_completions(content, pos);
    if items.is_empty() {
        return None;
    }

    let lsp_items: Vec<CompletionItem> = items
        .into_iter()
        .map(|item| {
            let (kind, format) = match item.kind {
                completion::CompletionItemKind::Value => {
                    (CompletionItemKind::VALUE, InsertTextFormat::PLAIN_TEXT)
                }
                completion::CompletionItemKind::Snippet => {
                    (CompletionItemKind::SNIPPET, InsertTextFormat::SNIPPET)
                }
            };

            CompletionItem {
                label: item.label,
                kind: Some(kind),
                detail: item.detail,
                documentation: item.documentation.map(|doc| {
                    Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: doc,
                    })
                }),
                insert_text: item.insert_text,
                insert_text_format: Some(format),
                ..Default::default()
            }
        })
        .collect();

    Some(CompletionResponse::Array(lsp_items))
}

/// Handle hover request for a text document
///
/// Shows tag documentation when hovering an `@LRD` tag and the status
/// description when hovering the status code of a response or error tag.
pub fn text_document_hover(content: &str, position: Position) -> Option<Hover> {
    let line = content.lines().nth(position.line as usize)?;
    if !is_comment_line(line) {
        return None;
    }

    let char_idx = utf16_pos_to_byte_index(line, position.character as usize)?;

    if let Some(code) = get_status_code_at_position(line, char_idx) {
        return Some(markdown_hover(crate::docs::get_status_code_documentation(
            code,
        )));
    }

    let kind = get_annotation_at_position(line, char_idx)?;
    Some(markdown_hover(
        crate::docs::get_annotation_documentation(kind).to_string(),
    ))
}

fn markdown_hover(value: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: None,
    }
}

fn get_annotation_at_position(line: &str, char_idx: usize) -> Option<TagKind> {
    MARKER_RE
        .find_iter(line)
        .find(|m| m.start() <= char_idx && char_idx <= m.end())
        .and_then(|m| TagKind::from_name(&m.as_str()[TAG_MARKER.len()..]))
}

fn get_status_code_at_position(line: &str, char_idx: usize) -> Option<u16> {
    STATUS_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .find(|m| m.start() <= char_idx && char_idx <= m.end())
        .and_then(|m| m.as_str().parse().ok())
        .filter(|code| is_valid_status(*code))
}

/// Handle document change and return diagnostics
///
/// # Returns
/// A vector of diagnostics for any validation errors
pub fn text_document_did_change(content: &str, _uri: Url) -> Vec<Diagnostic> {
    let diagnostics_list = diagnostics::validate_annotations(content);
    let lines: Vec<&str> = content.lines().collect();

    diagnostics_list
        .into_iter()
        .map(|diag| {
            let severity = match diag.severity {
                diagnostics::DiagnosticSeverity::Error => DiagnosticSeverity::ERROR,
                diagnostics::DiagnosticSeverity::Warning => DiagnosticSeverity::WARNING,
            };

            // Convert byte indices to UTF-16 code unit offsets
            let line = lines.get(diag.line).copied().unwrap_or("");
            let char_start = diag
                .char_start
                .map(|idx| byte_index_to_utf16_col(line, idx))
                .unwrap_or(0);
            let char_end = diag
                .char_end
                .map(|idx| byte_index_to_utf16_col(line, idx))
                .unwrap_or_else(|| byte_index_to_utf16_col(line, line.len()));

            Diagnostic {
                range: Range {
                    start: Position {
                        line: diag.line as u32,
                        character: char_start as u32,
                    },
                    end: Position {
                        line: diag.line as u32,
                        character: char_end as u32,
                    },
                },
                severity: Some(severity),
                source: Some("reqdoc-lsp".to_string()),
                message: diag.message,
                ..Default::default()
            }
        })
        .collect()
}
