//! Error types for Inkly Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    #[error("Invalid field path '{path}': {reason}")]
    InvalidFieldPath { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
