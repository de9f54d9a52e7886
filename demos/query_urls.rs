//! Query URL Example
//!
//! Builds a few query requests and prints their URLs together with the
//! decoded IQL condition.
//!
//! Run with: RUST_LOG=debug cargo run --example query_urls

use inkly_iql::{deserialize, serialize};
use inkly_sdk::{op, Connection, ConnectionConfig, Filter, Limit, Where};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ConnectionConfig::new("proj-id", "token").with_endpoint("inkly.example.com");
    let connection = Connection::new(config)?;
    let articles = connection.content("post");

    let by_slug: Where = Filter::new().field("slug", "my-article").into();
    let request = articles.get_first_where(&by_slug)?;
    tracing::info!("{} {}", request.method, request.url);

    let readers = Where::from(vec![
        Filter::new()
            .field("tags", op::contains("how-to"))
            .field("meta", Filter::new().field("readCount", op::greater_than(100))),
        Filter::new().field("featured", true),
    ]);
    let request = articles.get_all_where(&readers, Limit::count(20)?)?;
    tracing::info!("{} {}", request.method, request.url);

    let iql = serialize(&readers)?;
    println!("IQL:    {}", iql);
    println!("Parsed: {}", serde_json::to_string_pretty(&deserialize(&iql))?);

    Ok(())
}
