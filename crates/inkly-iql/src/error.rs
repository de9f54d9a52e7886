//! Codec error types

use inkly_core::CoreError;
use thiserror::Error;

/// Codec error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IqlError {
    /// Operator, value or field path rejected by the core types
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Dynamic input that is not a filter object or an array of them
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, IqlError>;
