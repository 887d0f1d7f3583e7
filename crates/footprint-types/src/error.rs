//! Error types for footprint.

use thiserror::Error;

/// Result type alias for footprint operations.
pub type Result<T> = std::result::Result<T, FootprintError>;

/// Errors that can occur while loading measurements or configuring an engine.
///
/// Estimation itself never fails: missing sizes degrade to zero or to the
/// speed-based fallback, and unknown extensions degrade to
/// [`ResourceCategory::Other`](crate::ResourceCategory::Other).
#[derive(Error, Debug)]
pub enum FootprintError {
    /// An ignore pattern is not a valid regular expression.
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source that failed to compile.
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },

    /// A connection speed is negative or not a finite number.
    #[error("Invalid connection speed: {0}")]
    InvalidSpeed(f64),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FootprintError {
    /// Creates an [`InvalidPattern`](Self::InvalidPattern) error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_message() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = FootprintError::invalid_pattern("(unclosed", source);
        assert!(err.to_string().starts_with("Invalid ignore pattern '(unclosed'"));
    }

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: FootprintError = source.into();
        assert!(matches!(err, FootprintError::Json(_)));
    }
}
