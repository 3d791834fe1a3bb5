use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::TAG_MARKER;

// `*`, `//` or `///` at the start of a line, with the spaces around it
static DECORATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:\*|///?)[ \t]*").unwrap());

/// Why a JSON object could not be isolated from the surrounding comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Input ended before the closing brace
    Unterminated,
    /// Another `@LRD` tag started before the object closed
    InterruptedByTag,
    /// The comment ended (`*/`) before the object closed
    InterruptedByCommentEnd,
    /// A string literal ran into a line break
    UnterminatedString,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unterminated => "JSON object is never closed",
            Self::InterruptedByTag => "JSON object is not closed before the next @LRD tag",
            Self::InterruptedByCommentEnd => "JSON object is not closed before the end of the comment",
            Self::UnterminatedString => "JSON string is not closed on its line",
        };
        f.write_str(text)
    }
}

/// Find the end (exclusive) of the JSON object opening at `open`.
///
/// Tracks brace depth outside string literals, so braces inside strings
/// and escaped quotes do not end the object early.
pub fn find_object_end(text: &str, open: usize) -> Result<usize, ScanError> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else {
                match byte {
                    b'\\' => escaped = true,
                    b'"' => in_string = false,
                    b'\n' => return Err(ScanError::UnterminatedString),
                    _ => {}
                }
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            b'*' if bytes.get(i + 1) == Some(&b'/') => {
                return Err(ScanError::InterruptedByCommentEnd)
            }
            b'@' if text[i..].starts_with(TAG_MARKER) => return Err(ScanError::InterruptedByTag),
            _ => {}
        }
    }

    Err(ScanError::Unterminated)
}

/// Remove block-comment decoration from every line of a captured object
pub fn strip_comment_decoration(raw: &str) -> String {
    DECORATION_RE.replace_all(raw, "").trim().to_string()
}

/// Decode an isolated object, rejecting anything that is not a JSON object
pub fn decode_object(raw: &str) -> Result<Value, String> {
    let cleaned = strip_comment_decoration(raw);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err("JSON value is not an object".to_string()),
        Err(err) => Err(format!("invalid JSON: {err}")),
    }
}
