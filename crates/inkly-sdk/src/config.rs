//! Connection configuration

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "connect.inkly.cc";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionConfig {
    /// Service endpoint, with or without scheme
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Project the content and buckets belong to
    pub project_id: String,

    /// Token sent in the auth header
    pub auth_token: String,
}

impl ConnectionConfig {
    /// Create a configuration for the default endpoint
    pub fn new(project_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            project_id: project_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Load configuration from `.env`, `config/inkly.*` and `INKLY_*` variables
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/inkly").required(false))
            .add_source(config::Environment::with_prefix("INKLY"))
            .build()
            .map_err(|e| SdkError::ConfigError(e.to_string()))?;

        Self::from_config(cfg)
    }

    /// Deserialize from an already assembled `config::Config`
    pub fn from_config(cfg: config::Config) -> Result<Self> {
        let loaded: Self = cfg
            .try_deserialize()
            .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e)))?;
        loaded.validate()?;
        tracing::debug!("Loaded connection config for project {}", loaded.project_id);
        Ok(loaded)
    }

    /// Check that required values are present
    pub fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(SdkError::ConfigError("project_id must not be empty".to_string()));
        }
        if self.auth_token.trim().is_empty() {
            return Err(SdkError::ConfigError("auth_token must not be empty".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(SdkError::ConfigError("endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = ConnectionConfig::new("proj-id", "token");
        assert_eq!(config.endpoint, "connect.inkly.cc");
        assert_eq!(config.project_id, "proj-id");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_endpoint() {
        let config = ConnectionConfig::new("p", "t").with_endpoint("inkly.example.com");
        assert_eq!(config.endpoint, "inkly.example.com");
    }

    #[test]
    fn test_serde_default_endpoint() {
        let config: ConnectionConfig =
            serde_json::from_str(r#"{"project_id": "p", "auth_token": "t"}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_config() {
        let cfg = config::Config::builder()
            .set_override("project_id", "proj-id")
            .unwrap()
            .set_override("auth_token", "token")
            .unwrap()
            .set_override("endpoint", "http://localhost:3000")
            .unwrap()
            .build()
            .unwrap();

        let config = ConnectionConfig::from_config(cfg).unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000");
        assert_eq!(config.auth_token, "token");
    }

    #[test]
    fn test_from_config_missing_token() {
        let cfg = config::Config::builder()
            .set_override("project_id", "proj-id")
            .unwrap()
            .build()
            .unwrap();

        let err = ConnectionConfig::from_config(cfg).unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }

    #[test]
    fn test_validate_rejects_blank_values() {
        assert!(ConnectionConfig::new(" ", "t").validate().is_err());
        assert!(ConnectionConfig::new("p", "").validate().is_err());
        assert!(ConnectionConfig::new("p", "t").with_endpoint("").validate().is_err());
    }
}
