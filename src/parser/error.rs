use std::fmt;
use std::ops::Range;

/// A single malformed `@LRD` occurrence.
///
/// The span is a byte range into the scanned comment block, starting at the
/// tag marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationError {
    message: String,
    span: Range<usize>,
}

impl AnnotationError {
    pub fn with_span(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AnnotationError {}
