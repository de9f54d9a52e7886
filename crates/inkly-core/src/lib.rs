//! Inkly Core - Core types for the Inkly query condition language (IQL)
//!
//! This crate provides the types shared by the codec and the SDK:
//! - Value types for filter input
//! - The operator registry
//! - Condition trees (input) and parsed clauses (output)
//! - Error types

pub mod condition;
pub mod error;
pub mod operator;
pub mod types;

// Re-export commonly used types
pub use condition::{
    op, AndGroup, Clause, Comparison, DeserializedExpression, FieldCondition, Filter, Operand,
    Where,
};
pub use error::{CoreError, Result};
pub use operator::Operator;
pub use types::{Literal, Value};
