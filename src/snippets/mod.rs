//! Runnable client snippets for documented endpoints.
//!
//! Every language has a [`SnippetGenerator`]; all of them consume the same
//! [`SnippetRequest`], which holds the preprocessing shared by every target:
//! the joined URL, the method, the auth flag and the body (the first request
//! example, only for methods that carry one).

mod curl;
mod javascript;
pub mod literal;
mod php;
mod python;

pub use curl::Curl;
pub use javascript::JavaScript;
pub use php::Php;
pub use python::Python;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{EndpointDocument, HttpMethod};

/// The only credential ever written into a snippet
pub const TOKEN_PLACEHOLDER: &str = "{token}";

static PATH_PARAMETER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^/{}]+)\}").unwrap());

/// Target language of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Curl,
    JavaScript,
    Php,
    Python,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::Curl, Self::JavaScript, Self::Php, Self::Python];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::JavaScript => "javascript",
            Self::Php => "php",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" | "shell" | "bash" => Ok(Self::Curl),
            "javascript" | "js" => Ok(Self::JavaScript),
            "php" => Ok(Self::Php),
            "python" | "py" => Ok(Self::Python),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Request details shared by every snippet language
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetRequest<'a> {
    pub method: HttpMethod,
    pub url: String,
    pub requires_auth: bool,
    pub body: Option<&'a Value>,
}

impl<'a> SnippetRequest<'a> {
    pub fn new(document: &'a EndpointDocument, base_url: &str) -> Self {
        let method = document.http_method();
        let body = if method.carries_body() {
            document.first_request_example().map(|example| &example.value)
        } else {
            None
        };

        Self {
            method,
            url: join_url(base_url, &route_placeholders(document.uri())),
            requires_auth: document.requires_auth(),
            body,
        }
    }
}

/// Renders a [`SnippetRequest`] as source code of one language
pub trait SnippetGenerator {
    fn language(&self) -> Language;

    fn generate(&self, request: &SnippetRequest<'_>) -> String;
}

/// Join base URL and URI with exactly one `/`
pub fn join_url(base_url: &str, uri: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        uri.trim_start_matches('/')
    )
}

/// Write `{name}` path parameters as `:name`.
///
/// Braces are reserved for [`TOKEN_PLACEHOLDER`], so a route parameter
/// called `token` never reads as the credential.
pub fn route_placeholders(uri: &str) -> String {
    PATH_PARAMETER_RE.replace_all(uri, ":$1").into_owned()
}

/// Generator for a language
pub fn generator(language: Language) -> &'static dyn SnippetGenerator {
    match language {
        Language::Curl => &Curl,
        Language::JavaScript => &JavaScript,
        Language::Php => &Php,
        Language::Python => &Python,
    }
}

/// Render a snippet for one endpoint
pub fn generate(document: &EndpointDocument, base_url: &str, language: Language) -> String {
    let request = SnippetRequest::new(document, base_url);
    generator(language).generate(&request)
}

/// Render a snippet for a language given by name
pub fn generate_for(document: &EndpointDocument, base_url: &str, language: &str) -> Result<String> {
    let language = language.parse::<Language>()?;
    Ok(generate(document, base_url, language))
}

/// Render snippets for every supported language, in [`Language::ALL`] order
pub fn generate_all(document: &EndpointDocument, base_url: &str) -> Vec<(Language, String)> {
    let request = SnippetRequest::new(document, base_url);
    Language::ALL
        .into_iter()
        .map(|language| (language, generator(language).generate(&request)))
        .collect()
}
