use std::fmt;

/// Errors reported to callers of the documentation pipeline.
///
/// Malformed annotations never show up here: the parser skips them. These
/// variants cover choices the caller made explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A snippet was requested for a language no generator exists for
    UnsupportedLanguage(String),
    /// The HTTP method of an endpoint input is not one of GET/POST/PUT/PATCH/DELETE/HEAD
    InvalidHttpMethod(String),
    /// The OpenAPI document could not be rendered
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage(language) => write!(
                f,
                "Unsupported snippet language '{language}'\n\
                 note: supported languages are curl, javascript, php, python"
            ),
            Self::InvalidHttpMethod(method) => write!(
                f,
                "Invalid HTTP method '{method}'\n\
                 note: expected one of GET, POST, PUT, PATCH, DELETE, HEAD"
            ),
            Self::Serialization(reason) => {
                write!(f, "Failed to serialize OpenAPI document: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
