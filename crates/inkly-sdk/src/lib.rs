//! Inkly SDK
//!
//! Builds requests for the Inkly content and asset service. Filters are
//! encoded with the IQL codec and passed as the `iql` query parameter next to
//! `limit`. Sending the request is left to the caller's HTTP client.

pub mod config;
pub mod connection;
pub mod endpoint;
pub mod error;
pub mod fetcher;
pub mod request;

// Re-export main types
pub use config::{ConnectionConfig, DEFAULT_ENDPOINT};
pub use connection::Connection;
pub use endpoint::parse_endpoint;
pub use error::{Result, SdkError};
pub use fetcher::{Fetcher, ResourceKind};
pub use request::{Limit, PreparedRequest, AUTH_HEADER};

// Re-export commonly used types from dependencies
pub use inkly_core::{op, Filter, Where};
