//! Error types for spout configuration and record decoding.

use thiserror::Error;

/// Result type for configuration and decoding operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Error types for spout configuration and record decoding
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// An argument violated a positivity or presence constraint
    ///
    /// Raised synchronously by the full constructor and the fluent mutators.
    /// Treat it as a bootstrap programming error, not something to retry.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A raw stream record could not be decoded into tuples
    ///
    /// Examples: non UTF-8 payload, malformed JSON
    #[error("Invalid data: {message}")]
    InvalidData { message: String, payload: Vec<u8> },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConnectorError {
    /// Check if this error is an argument validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ConnectorError::InvalidArgument(_))
    }

    /// Check if this error is due to invalid record data
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, ConnectorError::InvalidData { .. })
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ConnectorError::InvalidArgument(message.into())
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>, payload: Vec<u8>) -> Self {
        ConnectorError::InvalidData {
            message: message.into(),
            payload,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ConnectorError::Configuration(message.into())
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConnectorError {
    fn from(err: toml::ser::Error) -> Self {
        ConnectorError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let invalid = ConnectorError::invalid_argument("maxRecordsPerFetch");
        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_invalid_data());

        let bad_data = ConnectorError::invalid_data("bad json", vec![1, 2, 3]);
        assert!(bad_data.is_invalid_data());
        assert!(!bad_data.is_invalid_argument());

        assert!(!ConnectorError::config("missing file").is_invalid_argument());
    }

    #[test]
    fn test_error_display() {
        let err = ConnectorError::invalid_argument("Value of x must be positive, but was 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Value of x must be positive, but was 0"
        );

        let err = ConnectorError::config("unreadable");
        assert_eq!(err.to_string(), "Configuration error: unreadable");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConnectorError = json_err.into();
        assert!(matches!(err, ConnectorError::Serialization(_)));
    }
}
