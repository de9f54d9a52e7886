//! Query request builders for collections and buckets

use crate::connection::Connection;
use crate::error::Result;
use crate::request::{Limit, PreparedRequest};
use inkly_core::{Filter, Where};

/// What a fetcher reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Content collection
    Content,
    /// Asset bucket
    Bucket,
}

impl ResourceKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Content => "content",
            ResourceKind::Bucket => "bucket",
        }
    }
}

/// Builds query requests against one collection or bucket
#[derive(Debug, Clone)]
pub struct Fetcher<'a> {
    connection: &'a Connection,
    kind: ResourceKind,
    name: String,
}

impl<'a> Fetcher<'a> {
    pub(crate) fn new(connection: &'a Connection, kind: ResourceKind, name: String) -> Self {
        Self {
            connection,
            kind,
            name,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every record, up to `limit`
    pub fn get_all(&self, limit: Limit) -> Result<PreparedRequest> {
        self.query(None, limit)
    }

    /// Records matching `condition`, up to `limit`
    pub fn get_all_where(&self, condition: &Where, limit: Limit) -> Result<PreparedRequest> {
        self.query(Some(condition), limit)
    }

    /// The first record matching `condition`
    pub fn get_first_where(&self, condition: &Where) -> Result<PreparedRequest> {
        self.query(Some(condition), Limit::ONE)
    }

    /// The record whose `id` equals `id`
    pub fn get_by_id(&self, id: &str) -> Result<PreparedRequest> {
        let condition = Where::And(Filter::new().field("id", id));
        self.query(Some(&condition), Limit::ONE)
    }

    fn query(&self, condition: Option<&Where>, limit: Limit) -> Result<PreparedRequest> {
        let iql = condition.map(inkly_iql::serialize).transpose()?;
        let mut url = self.connection.url_for(&[
            self.kind.path_segment(),
            self.connection.config().project_id.as_str(),
            self.name.as_str(),
            "query",
        ])?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(iql) = &iql {
                query.append_pair("iql", iql);
            }
            query.append_pair("limit", &limit.to_string());
        }

        tracing::debug!("Prepared {} query: {}", self.kind.path_segment(), url);
        Ok(self.connection.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    #[test]
    fn test_kind_segments() {
        assert_eq!(ResourceKind::Content.path_segment(), "content");
        assert_eq!(ResourceKind::Bucket.path_segment(), "bucket");
    }

    #[test]
    fn test_fetcher_accessors() {
        let connection = Connection::new(ConnectionConfig::new("p", "t")).unwrap();
        let fetcher = connection.assets("uploads");
        assert_eq!(fetcher.kind(), ResourceKind::Bucket);
        assert_eq!(fetcher.name(), "uploads");
    }
}
