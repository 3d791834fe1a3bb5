use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::AnnotationError;
use super::json;
use super::status::{is_valid_status, status_description};
use super::{Annotation, TagKind};
use crate::model::{DeprecationInfo, EnumValueEntry, RequestExampleEntry, ResponseSchemaEntry};

// Static regex patterns to avoid recompilation
static STATUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\s+(\d+)").unwrap());
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\s+([A-Za-z0-9_]+)").unwrap());
static OBJECT_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\s+\{").unwrap());
static ENUM_RE: Lazy<Regex> = Lazy::new(|| {
    // Values are pipe-separated segments; empty segments (`a||b`, `|a`) are kept
    Regex::new(
        r"\A[ \t]+([A-Za-z0-9_]+)(?:[ \t]+((?:[^\s|]+|\|[ \t]*[^\s|]*)(?:[ \t]*\|[ \t]*[^\s|]*)*)(?:[ \t]+([^\r\n]*))?)?",
    )
    .unwrap()
});

/// A successfully parsed tag and the byte offset where scanning resumes
pub(super) type Parsed = (Annotation, usize);

/// Parse the arguments of one tag.
///
/// `start` is the offset of the `@LRD` marker, `args` the offset right after
/// the tag name.
pub(super) fn parse(
    kind: TagKind,
    block: &str,
    start: usize,
    args: usize,
) -> Result<Parsed, AnnotationError> {
    match kind {
        TagKind::Response | TagKind::Error => parse_status_schema(kind, block, start, args),
        TagKind::Example => parse_example(block, start, args),
        TagKind::Enum => parse_enum(block, start, args),
        TagKind::Deprecated => Ok(parse_deprecated(block, args)),
    }
}

/// Format: @LRDresponse STATUS {JSON} / @LRDerror STATUS {JSON}
fn parse_status_schema(
    kind: TagKind,
    block: &str,
    start: usize,
    args: usize,
) -> Result<Parsed, AnnotationError> {
    let marker = kind.marker();
    let fail = |message: String| AnnotationError::with_span(message, start..line_end(block, args));

    let captures = STATUS_RE.captures(&block[args..]).ok_or_else(|| {
        fail(format!(
            "Missing status code for {marker}\n\
             help: expected '{marker} <status> <json object>'\n\
             note: example '{marker} 200 {{\"id\": 1}}'"
        ))
    })?;
    let digits = &captures[1];
    let status_code = digits
        .parse::<u16>()
        .ok()
        .filter(|code| is_valid_status(*code))
        .ok_or_else(|| {
            fail(format!(
                "Invalid HTTP status code: {digits}. Must be between 100 and 599."
            ))
        })?;

    let after_status = args + captures.get(0).map_or(0, |m| m.end());
    let schema_range = object_range(block, start, after_status, marker)?;
    let schema = decode(block, start, schema_range.clone())?;

    let entry = ResponseSchemaEntry {
        status_code,
        description: status_description(status_code).to_string(),
        schema,
        examples: None,
    };
    let annotation = match kind {
        TagKind::Error => Annotation::Error(entry),
        _ => Annotation::Response(entry),
    };

    Ok((annotation, schema_range.end))
}

/// Format: @LRDexample NAME {JSON}
fn parse_example(block: &str, start: usize, args: usize) -> Result<Parsed, AnnotationError> {
    let marker = TagKind::Example.marker();
    let captures = IDENTIFIER_RE.captures(&block[args..]).ok_or_else(|| {
        AnnotationError::with_span(
            format!(
                "Missing example name for {marker}\n\
                 help: expected '{marker} <name> <json object>'\n\
                 note: names may contain letters, digits and underscores"
            ),
            start..line_end(block, args),
        )
    })?;
    let name = captures[1].to_string();

    let after_name = args + captures.get(0).map_or(0, |m| m.end());
    let value_range = object_range(block, start, after_name, marker)?;
    let value = decode(block, start, value_range.clone())?;

    Ok((
        Annotation::Example(RequestExampleEntry { name, value }),
        value_range.end,
    ))
}

/// Format: @LRDenum FIELD a|b|c [DESCRIPTION]
fn parse_enum(block: &str, start: usize, args: usize) -> Result<Parsed, AnnotationError> {
    let marker = TagKind::Enum.marker();
    let end = line_end(block, args);
    let fail = |message: String| AnnotationError::with_span(message, start..end);

    let captures = ENUM_RE.captures(&block[args..end]).ok_or_else(|| {
        fail(format!(
            "Missing field name for {marker}\n\
             help: expected '{marker} <field> <value>|<value> [description]'"
        ))
    })?;
    let field = captures[1].to_string();

    let values: Vec<String> = captures
        .get(2)
        .map(|m| m.as_str().split('|').map(|v| v.trim().to_string()).collect())
        .ok_or_else(|| {
            fail(format!(
                "Missing values for {marker} {field}\n\
                 help: list the allowed values separated by '|'\n\
                 note: example '{marker} {field} pending|approved|rejected'"
            ))
        })?;

    let description = captures
        .get(3)
        .map(|m| strip_comment_end(m.as_str()).to_string())
        .unwrap_or_default();

    Ok((
        Annotation::Enum(EnumValueEntry {
            field,
            values,
            description,
        }),
        end,
    ))
}

/// Format: @LRDdeprecated [MESSAGE]
fn parse_deprecated(block: &str, args: usize) -> Parsed {
    let end = line_end(block, args);
    let message = strip_comment_end(&block[args..end]);
    let info = DeprecationInfo::new(Some(message));

    (Annotation::Deprecated(info), end)
}

/// Locate the JSON object that must follow the fixed arguments of a tag
fn object_range(
    block: &str,
    start: usize,
    from: usize,
    marker: &str,
) -> Result<Range<usize>, AnnotationError> {
    let open = OBJECT_START_RE
        .find(&block[from..])
        .map(|m| from + m.end() - 1)
        .ok_or_else(|| {
            AnnotationError::with_span(
                format!(
                    "Expected a JSON object after {marker}\n\
                     help: the object must start with '{{' after whitespace"
                ),
                start..line_end(block, from),
            )
        })?;

    let end = json::find_object_end(block, open).map_err(|err| {
        AnnotationError::with_span(
            format!("Invalid {marker} annotation: {err}"),
            start..line_end(block, open),
        )
    })?;

    Ok(open..end)
}

fn decode(block: &str, start: usize, range: Range<usize>) -> Result<serde_json::Value, AnnotationError> {
    json::decode_object(&block[range.clone()])
        .map_err(|err| AnnotationError::with_span(err, start..range.end))
}

/// Offset of the end of the line containing `from` (exclusive of the newline)
pub(super) fn line_end(block: &str, from: usize) -> usize {
    block[from..].find('\n').map_or(block.len(), |i| from + i)
}

// Text running to the end of a line may carry the closing `*/` of a one-line block
fn strip_comment_end(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix("*/").map_or(text, str::trim_end)
}
