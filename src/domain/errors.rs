//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Velo error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific failure categories and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeloError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (parse or compile failures)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Fictitious value generation errors
    #[error("Generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for VeloError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for VeloError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for VeloError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<regex::Error> for VeloError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

impl From<fancy_regex::Error> for VeloError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VeloError::Configuration("missing file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VeloError = io_err.into();
        assert!(matches!(err, VeloError::Io(_)));
    }
}
