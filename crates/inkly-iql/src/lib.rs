//! Inkly IQL - condition codec for the Inkly query service
//!
//! IQL packs an OR-of-ANDs filter into a single query-string value:
//!
//! ```text
//! ('lastName'="doe"&'age'>50)|('lastName'="doe"&'isBanned'=false)
//! ```
//!
//! - [`serialize`] turns a [`Where`](inkly_core::Where) tree into that string
//! - [`serialize_json`] does the same for a JSON filter object or array
//! - [`deserialize`] parses the string back into typed clauses

pub mod deserializer;
pub mod encoding;
pub mod error;
pub mod expander;
pub mod json;
pub mod serializer;
pub mod walker;

// Re-export main entry points
pub use deserializer::{deserialize, deserialize_opt};
pub use error::{IqlError, Result};
pub use json::{serialize_json, where_from_json};
pub use serializer::{serialize, serialize_filter};
pub use walker::Walker;
