//! Project connection

use crate::config::ConnectionConfig;
use crate::endpoint::parse_endpoint;
use crate::error::{Result, SdkError};
use crate::fetcher::{Fetcher, ResourceKind};
use crate::request::PreparedRequest;
use url::Url;

/// A validated connection to one project
#[derive(Debug, Clone)]
pub struct Connection {
    config: ConnectionConfig,
    base_url: Url,
}

impl Connection {
    /// Validate the configuration and resolve its endpoint
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        config.validate()?;
        let base_url = parse_endpoint(&config.endpoint)?;
        tracing::debug!("Connection for project {} using {}", config.project_id, base_url);
        Ok(Self { config, base_url })
    }

    /// Load the configuration from the environment and connect
    pub fn from_env() -> Result<Self> {
        Self::new(ConnectionConfig::load()?)
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request for the project's access details
    pub fn access_details(&self) -> Result<PreparedRequest> {
        let mut url = self.url_for(&["projects", "accessDetails"])?;
        url.query_pairs_mut().append_pair("projectId", &self.config.project_id);
        Ok(self.get(url))
    }

    /// Fetcher over a content collection
    pub fn content(&self, collection: impl Into<String>) -> Fetcher<'_> {
        Fetcher::new(self, ResourceKind::Content, collection.into())
    }

    /// Fetcher over an asset bucket
    pub fn assets(&self, bucket: impl Into<String>) -> Fetcher<'_> {
        Fetcher::new(self, ResourceKind::Bucket, bucket.into())
    }

    /// Base URL with its path replaced by `segments`, each escaped on its own
    pub(crate) fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidEndpoint(self.base_url.to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> PreparedRequest {
        PreparedRequest::get(url, &self.config.auth_token)
    }
}
