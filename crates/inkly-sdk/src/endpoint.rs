//! Endpoint normalisation

use crate::error::{Result, SdkError};
use url::Url;

/// Parse an endpoint into an absolute URL.
///
/// Relative paths are rejected; a bare host gets an `https://` scheme.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let endpoint = endpoint.trim();
    if endpoint.starts_with('/') {
        return Err(SdkError::InvalidEndpoint(format!(
            "'{}' must be absolute",
            endpoint
        )));
    }

    let url = if endpoint.contains("://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("https://{}", endpoint))?
    };

    if url.cannot_be_a_base() {
        return Err(SdkError::InvalidEndpoint(format!(
            "'{}' cannot be used as a base URL",
            endpoint
        )));
    }
    Ok(url)
}
