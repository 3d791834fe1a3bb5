use once_cell::sync::Lazy;
use regex::Regex;
use reqdoc::parser::{status_description, TagKind, TAG_MARKER};
use serde::{Deserialize, Serialize};

use crate::utils::{is_comment_line, strip_comment_prefix, utf16_pos_to_byte_index};

static STATUS_ARGUMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@LRD(?:response|error)[ \t]+(\d*)$").unwrap());

/// Status codes offered after `@LRDresponse` / `@LRDerror`
const COMMON_STATUS_CODES: [u16; 13] = [
    200, 201, 202, 204, 400, 401, 403, 404, 422, 429, 500, 502, 503,
];

/// Position in a text document
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Character offset in line (0-indexed, UTF-16 code units)
    pub character: usize,
}

/// An auto-completion suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Label shown in completion list
    pub label: String,
    /// Kind of completion item
    pub kind: CompletionItemKind,
    /// Short detail shown alongside label
    pub detail: Option<String>,
    /// Full documentation for this item
    pub documentation: Option<String>,
    /// Text to insert when selected
    pub insert_text: Option<String>,
}

/// Type of completion item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompletionItemKind {
    /// A status code value
    Value,
    /// A tag snippet
    Snippet,
}

/// Get completion suggestions at the given position
///
/// Completions are only offered inside comment lines: tag snippets after `@`
/// and common status codes after `@LRDresponse ` or `@LRDerror `.
pub fn get_completions(content: &str, position: Position) -> Vec<CompletionItem> {
    let Some(line) = content.lines().nth(position.line) else {
        return Vec::new();
    };

    let byte_index = utf16_pos_to_byte_index(line, position.character).unwrap_or(line.len());
    let prefix = &line[..byte_index];

    if !is_comment_line(prefix) {
        return Vec::new();
    }
    let after_comment = strip_comment_prefix(prefix);

    if let Some(captures) = STATUS_ARGUMENT_RE.captures(after_comment) {
        return get_status_code_completions(&captures[1]);
    }

    let word = after_comment
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default();
    if word.starts_with('@') {
        return get_tag_completions(word);
    }

    Vec::new()
}

fn tag_snippet(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Response => r#"@LRDresponse ${1:200} {"${2:id}": ${3:1}}"#,
        TagKind::Example => r#"@LRDexample ${1:name} {"${2:field}": "${3:value}"}"#,
        TagKind::Error => r#"@LRDerror ${1:404} {"${2:message}": "${3:Not found}"}"#,
        TagKind::Enum => "@LRDenum ${1:field} ${2:first|second} ${3:Description}",
        TagKind::Deprecated => "@LRDdeprecated ${1:Use the newer endpoint instead}",
    }
}

// `typed` is the word under the cursor, starting with `@`
fn get_tag_completions(typed: &str) -> Vec<CompletionItem> {
    // `@`, `@L`, `@LR` narrow nothing beyond the marker itself
    let matches = |kind: &TagKind| {
        if typed.len() <= TAG_MARKER.len() {
            TAG_MARKER.starts_with(typed)
        } else {
            kind.marker().starts_with(typed)
        }
    };

    TagKind::ALL
        .into_iter()
        .filter(|kind| matches(kind))
        .map(|kind| CompletionItem {
            label: kind.marker().to_string(),
            kind: CompletionItemKind::Snippet,
            detail: Some(crate::docs::get_annotation_summary(kind).to_string()),
            documentation: Some(crate::docs::get_annotation_documentation(kind).to_string()),
            insert_text: Some(tag_snippet(kind).to_string()),
        })
        .collect()
}

fn get_status_code_completions(filter: &str) -> Vec<CompletionItem> {
    COMMON_STATUS_CODES
        .iter()
        .map(u16::to_string)
        .filter(|code| code.starts_with(filter))
        .map(|code| {
            let description = code.parse().map_or("Response", status_description);
            CompletionItem {
                detail: Some(description.to_string()),
                documentation: code
                    .parse()
                    .ok()
                    .map(crate::docs::get_status_code_documentation),
                insert_text: Some(code.clone()),
                label: code,
                kind: CompletionItemKind::Value,
            }
        })
        .collect()
}
