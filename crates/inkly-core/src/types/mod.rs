//! Value types for IQL
//!
//! - `Value`: any value a caller may place in a filter
//! - `Literal`: the scalar subset the wire format can carry
//! - field path validation

pub mod field_path;
pub mod literal;
pub mod value;

pub use field_path::validate_field_path;
pub use literal::Literal;
pub use value::Value;
