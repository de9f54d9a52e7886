//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Endpoint cannot be used as a base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// URL parse error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Limit must be at least 1
    #[error("Invalid limit: {0}")]
    InvalidLimit(u32),

    /// Condition could not be encoded
    #[error("Condition error: {0}")]
    Iql(#[from] inkly_iql::IqlError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
