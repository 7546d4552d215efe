//! Error types and handlers for registry cleanup operations

pub mod handlers;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Connection, timeout, DNS or TLS failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Registry answered a read request with a non-success status
    #[error("HTTP error during {operation} (status {status}): {body}")]
    HttpStatus {
        operation: String,
        status: StatusCode,
        body: String,
    },

    /// Response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(String),

    /// Config blob carries a creation date that is not RFC3339
    #[error("Invalid creation date {value:?} for tag {tag}: {reason}")]
    TimestampParse {
        tag: String,
        value: String,
        reason: String,
    },

    /// Manifest has no config descriptor to resolve a creation date from
    #[error("Manifest for tag {0} has no config descriptor")]
    MissingConfig(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// True for failures raised while reading registry state, as opposed to
    /// bad input supplied by the operator.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            RegistryError::Transport(_)
                | RegistryError::HttpStatus { .. }
                | RegistryError::Decode(_)
                | RegistryError::TimestampParse { .. }
                | RegistryError::MissingConfig(_)
        )
    }
}

impl From<url::ParseError> for RegistryError {
    fn from(err: url::ParseError) -> Self {
        RegistryError::Validation(err.to_string())
    }
}
