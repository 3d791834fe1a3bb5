use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::parser::{self, ParsedAnnotations};

static PATH_PARAMETER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\??\}").unwrap());

/// Message used when `@LRDdeprecated` carries no text
pub const DEFAULT_DEPRECATION_MESSAGE: &str = "This endpoint is deprecated";

/// HTTP method of a documented endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    pub const ALL: [Self; 6] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Head,
    ];

    /// Wire-level spelling, e.g. `POST`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }

    /// SDK-call spelling, e.g. `post`
    pub const fn as_lowercase(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
        }
    }

    /// Whether requests with this method conventionally carry a JSON body
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == normalized)
            .ok_or_else(|| Error::InvalidHttpMethod(s.to_string()))
    }
}

/// One documented response, from `@LRDresponse` or `@LRDerror`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchemaEntry {
    pub status_code: u16,
    pub description: String,
    pub schema: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Value>>,
}

/// Error responses share the shape of success responses but live in their own sequence
pub type ErrorSchemaEntry = ResponseSchemaEntry;

/// A named request body example from `@LRDexample`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestExampleEntry {
    pub name: String,
    pub value: Value,
}

/// Allowed values of one field, from `@LRDenum`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueEntry {
    pub field: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Deprecation state from `@LRDdeprecated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationInfo {
    pub is_deprecated: bool,
    pub message: String,
}

impl DeprecationInfo {
    /// Build a deprecation notice, falling back to the default message for blank text
    pub fn new(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_DEPRECATION_MESSAGE);

        Self {
            is_deprecated: true,
            message: message.to_string(),
        }
    }
}

/// Raw endpoint record handed over by route introspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInput {
    pub uri: String,
    pub http_method: String,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default, alias = "doc_block")]
    pub raw_comment_block: String,
}

/// The documented form of one API operation.
///
/// Built once from route data; the comment block is parsed during
/// construction and the result cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDocument {
    uri: String,
    http_method: HttpMethod,
    requires_auth: bool,
    raw_comment_block: String,
    path_parameters: Vec<String>,
    response_schemas: Vec<ResponseSchemaEntry>,
    request_examples: IndexMap<String, RequestExampleEntry>,
    error_schemas: Vec<ErrorSchemaEntry>,
    enum_values: IndexMap<String, EnumValueEntry>,
    deprecation: Option<DeprecationInfo>,
}

impl EndpointDocument {
    pub fn new(
        uri: impl AsRef<str>,
        http_method: HttpMethod,
        requires_auth: bool,
        raw_comment_block: impl Into<String>,
    ) -> Self {
        let raw_comment_block = raw_comment_block.into();
        let annotations = parser::parse_comment_block(&raw_comment_block);
        Self::with_annotations(uri, http_method, requires_auth, raw_comment_block, annotations)
    }

    /// Build a document from annotations that were parsed elsewhere
    pub fn with_annotations(
        uri: impl AsRef<str>,
        http_method: HttpMethod,
        requires_auth: bool,
        raw_comment_block: impl Into<String>,
        annotations: ParsedAnnotations,
    ) -> Self {
        let uri = normalize_uri(uri.as_ref());
        let path_parameters = extract_path_parameters(&uri);

        Self {
            uri,
            http_method,
            requires_auth,
            raw_comment_block: raw_comment_block.into(),
            path_parameters,
            response_schemas: annotations.response_schemas,
            request_examples: annotations.request_examples,
            error_schemas: annotations.error_schemas,
            enum_values: annotations.enum_values,
            deprecation: annotations.deprecation,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn raw_comment_block(&self) -> &str {
        &self.raw_comment_block
    }

    /// Placeholder names from the URI, in order of appearance
    pub fn path_parameters(&self) -> &[String] {
        &self.path_parameters
    }

    pub fn response_schemas(&self) -> &[ResponseSchemaEntry] {
        &self.response_schemas
    }

    pub fn request_examples(&self) -> &IndexMap<String, RequestExampleEntry> {
        &self.request_examples
    }

    pub fn error_schemas(&self) -> &[ErrorSchemaEntry] {
        &self.error_schemas
    }

    pub fn enum_values(&self) -> &IndexMap<String, EnumValueEntry> {
        &self.enum_values
    }

    pub fn deprecation(&self) -> Option<&DeprecationInfo> {
        self.deprecation.as_ref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation.as_ref().is_some_and(|d| d.is_deprecated)
    }

    /// The example that snippets use as request body: the first one documented
    pub fn first_request_example(&self) -> Option<&RequestExampleEntry> {
        self.request_examples.values().next()
    }
}

impl TryFrom<EndpointInput> for EndpointDocument {
    type Error = Error;

    fn try_from(input: EndpointInput) -> Result<Self, Self::Error> {
        let method = input.http_method.parse::<HttpMethod>()?;
        Ok(Self::new(
            input.uri,
            method,
            input.requires_auth,
            input.raw_comment_block,
        ))
    }
}

/// Turn a batch of introspected routes into documents.
///
/// An input that cannot be documented is logged and skipped; the rest of the
/// batch is still processed.
pub fn document_all<I>(inputs: I) -> Vec<EndpointDocument>
where
    I: IntoIterator<Item = EndpointInput>,
{
    inputs
        .into_iter()
        .filter_map(|input| {
            let uri = input.uri.clone();
            match EndpointDocument::try_from(input) {
                Ok(document) => Some(document),
                Err(err) => {
                    tracing::warn!(%uri, error = %err, "skipping endpoint");
                    None
                }
            }
        })
        .collect()
}

/// Single leading slash, no trailing slash except for the root
pub fn normalize_uri(uri: &str) -> String {
    let trimmed = uri.trim().trim_matches('/');
    format!("/{trimmed}")
}

fn extract_path_parameters(uri: &str) -> Vec<String> {
    PATH_PARAMETER_RE
        .captures_iter(uri)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
