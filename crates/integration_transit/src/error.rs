//! Transit error types

use thiserror::Error;

/// Errors that can occur during transit operations
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the transit service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Upstream answered with a non-success HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the expected schema
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl TransitError {
    /// Returns true if the upstream payload was rejected by the schema
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

impl From<serde_json::Error> for TransitError {
    fn from(err: serde_json::Error) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(TransitError::ValidationError("missing field".to_string()).is_validation());
        assert!(!TransitError::RequestFailed("HTTP 500".to_string()).is_validation());
        assert!(!TransitError::ConnectionFailed("refused".to_string()).is_validation());
        assert!(!TransitError::Timeout { timeout_secs: 3 }.is_validation());
    }

    #[test]
    fn test_serde_error_becomes_validation_error() {
        let err = serde_json::from_str::<u8>("\"not a number\"").unwrap_err();
        let err = TransitError::from(err);
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_error_display() {
        let err = TransitError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = TransitError::RequestFailed("HTTP 401 Unauthorized".to_string());
        assert!(err.to_string().contains("401"));

        let err = TransitError::ConfigurationError("base_url must not be empty".to_string());
        assert!(err.to_string().contains("base_url"));
    }
}
