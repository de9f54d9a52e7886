//! Common test utilities for SDK integration tests

use inkly_sdk::{Connection, ConnectionConfig};

pub const PROJECT_ID: &str = "proj-id";
pub const TOKEN: &str = "token";

/// Connection against the default endpoint
pub fn connection() -> Connection {
    Connection::new(ConnectionConfig::new(PROJECT_ID, TOKEN)).expect("valid test config")
}
