//! Error types for factcheck-sources
//!
//! Errors are layered with `thiserror`: a top-level [`Error`] wraps the
//! extraction-specific [`ExtractionError`]. A paragraph without a link is
//! not an error; it yields the placeholder instead.

use thiserror::Error;

/// The main error type for source extraction
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Source extraction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No element matched the selector (e.g. the source block is absent)
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A configured class or tag does not form a valid CSS selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Extractor configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for source extraction operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Whether this error means the requested element was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Extraction(ExtractionError::ElementNotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Extraction(ExtractionError::ElementNotFound(
            ".m-superbox__content".to_string(),
        ));
        assert!(err.to_string().contains("Element not found"));
        assert!(err.to_string().contains(".m-superbox__content"));
    }

    #[test]
    fn test_extraction_error() {
        let err = ExtractionError::InvalidSelector("p[".to_string());
        assert_eq!(err.to_string(), "Invalid selector: p[");
    }

    #[test]
    fn test_is_not_found() {
        let err: Error = ExtractionError::ElementNotFound("div".to_string()).into();
        assert!(err.is_not_found());

        let err: Error = ExtractionError::InvalidConfig("empty".to_string()).into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
