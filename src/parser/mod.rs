//! Parser for `@LRD` documentation tags embedded in comment blocks.
//!
//! Two entry points share one scanner:
//! - [`parse_comment_block`] is lenient: malformed tags are skipped and the
//!   rest of the block is still parsed.
//! - [`scan_annotations`] reports every tag occurrence together with its byte
//!   span and either the parsed value or the reason it was rejected.

mod annotations;
mod error;
mod json;
mod status;

pub use error::AnnotationError;
pub use json::{decode_object, find_object_end, strip_comment_decoration, ScanError};
pub use status::{is_valid_status, status_description};

use std::ops::Range;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    DeprecationInfo, EnumValueEntry, ErrorSchemaEntry, RequestExampleEntry, ResponseSchemaEntry,
};

/// Prefix shared by every documentation tag
pub const TAG_MARKER: &str = "@LRD";

static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@LRD[A-Za-z]*").unwrap());

/// Kind of documentation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// @LRDresponse - Document a success response schema
    Response,
    /// @LRDexample - Provide a named request body example
    Example,
    /// @LRDerror - Document an error response schema
    Error,
    /// @LRDenum - List the allowed values of a field
    Enum,
    /// @LRDdeprecated - Mark the endpoint as deprecated
    Deprecated,
}

impl TagKind {
    pub const ALL: [Self; 5] = [
        Self::Response,
        Self::Example,
        Self::Error,
        Self::Enum,
        Self::Deprecated,
    ];

    /// Tag name without the marker prefix
    pub const fn name(self) -> &'static str {
        match self {
            Self::Response => "response",
            Self::Example => "example",
            Self::Error => "error",
            Self::Enum => "enum",
            Self::Deprecated => "deprecated",
        }
    }

    /// Full tag as written in comments
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Response => "@LRDresponse",
            Self::Example => "@LRDexample",
            Self::Error => "@LRDerror",
            Self::Enum => "@LRDenum",
            Self::Deprecated => "@LRDdeprecated",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Value carried by one well-formed tag
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Response(ResponseSchemaEntry),
    Example(RequestExampleEntry),
    Error(ErrorSchemaEntry),
    Enum(EnumValueEntry),
    Deprecated(DeprecationInfo),
}

/// One `@LRD` marker found in a comment block
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    /// Tag name as written after the marker, e.g. `response`
    pub name: String,
    /// Recognized kind, `None` for unknown tag names
    pub kind: Option<TagKind>,
    /// Byte range from the marker to the last consumed character
    pub span: Range<usize>,
    pub result: Result<Annotation, AnnotationError>,
}

/// Everything the tags of one comment block document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAnnotations {
    pub response_schemas: Vec<ResponseSchemaEntry>,
    pub request_examples: IndexMap<String, RequestExampleEntry>,
    pub error_schemas: Vec<ErrorSchemaEntry>,
    pub enum_values: IndexMap<String, EnumValueEntry>,
    pub deprecation: Option<DeprecationInfo>,
}

impl ParsedAnnotations {
    /// Record one annotation.
    ///
    /// Responses and errors accumulate; examples and enums are keyed by name
    /// and a later tag replaces the earlier value in place; the last
    /// deprecation tag wins.
    pub fn insert(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Response(entry) => self.response_schemas.push(entry),
            Annotation::Error(entry) => self.error_schemas.push(entry),
            Annotation::Example(entry) => {
                self.request_examples.insert(entry.name.clone(), entry);
            }
            Annotation::Enum(entry) => {
                self.enum_values.insert(entry.field.clone(), entry);
            }
            Annotation::Deprecated(info) => self.deprecation = Some(info),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.response_schemas.is_empty()
            && self.request_examples.is_empty()
            && self.error_schemas.is_empty()
            && self.enum_values.is_empty()
            && self.deprecation.is_none()
    }
}

/// Scan a comment block and report every tag occurrence in order of appearance.
///
/// After a tag whose JSON object was captured, scanning resumes behind the
/// object so that tag-like text inside JSON strings is not picked up. After a
/// malformed tag, scanning resumes right behind its marker.
pub fn scan_annotations(block: &str) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let mut cursor = 0;

    while let Some(found) = MARKER_RE.find_at(block, cursor) {
        let start = found.start();
        let args = found.end();
        let name = &found.as_str()[TAG_MARKER.len()..];
        let kind = TagKind::from_name(name);

        let (result, end) = match kind {
            Some(kind) => match annotations::parse(kind, block, start, args) {
                Ok((annotation, end)) => (Ok(annotation), end),
                Err(err) => {
                    let end = err.span().end;
                    (Err(err), end)
                }
            },
            None => {
                let end = annotations::line_end(block, args);
                let err = AnnotationError::with_span(
                    format!(
                        "Unknown annotation '{}'\n\
                         note: valid annotations are @LRDresponse, @LRDexample, @LRDerror, @LRDenum, @LRDdeprecated",
                        found.as_str()
                    ),
                    start..args,
                );
                (Err(err), end)
            }
        };

        cursor = if result.is_ok() { end } else { args };
        occurrences.push(Occurrence {
            name: name.to_string(),
            kind,
            span: start..end,
            result,
        });
    }

    occurrences
}

/// Parse all tags of a comment block, skipping malformed ones
pub fn parse_comment_block(block: &str) -> ParsedAnnotations {
    let mut parsed = ParsedAnnotations::default();

    for occurrence in scan_annotations(block) {
        match occurrence.result {
            Ok(annotation) => parsed.insert(annotation),
            Err(err) => {
                tracing::debug!(
                    tag = %occurrence.name,
                    span = ?occurrence.span,
                    error = %err,
                    "skipping malformed annotation"
                );
            }
        }
    }

    parsed
}

/// `@LRDresponse` entries in order of appearance
pub fn parse_response_schemas(block: &str) -> Vec<ResponseSchemaEntry> {
    parse_comment_block(block).response_schemas
}

/// `@LRDexample` entries keyed by name
pub fn parse_examples(block: &str) -> IndexMap<String, RequestExampleEntry> {
    parse_comment_block(block).request_examples
}

/// `@LRDerror` entries in order of appearance
pub fn parse_error_schemas(block: &str) -> Vec<ErrorSchemaEntry> {
    parse_comment_block(block).error_schemas
}

/// `@LRDenum` entries keyed by field
pub fn parse_enums(block: &str) -> IndexMap<String, EnumValueEntry> {
    parse_comment_block(block).enum_values
}

/// `@LRDdeprecated` state, `None` when the block has no such tag
pub fn parse_deprecation(block: &str) -> Option<DeprecationInfo> {
    parse_comment_block(block).deprecation
}
