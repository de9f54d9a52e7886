//! Prepared requests

use crate::error::{Result, SdkError};
use std::fmt;
use std::num::NonZeroU32;
use url::Url;

/// Header carrying the auth token
pub const AUTH_HEADER: &str = "X-Inkly-Auth-Token";

/// How many records a query may return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    /// At most `n` records
    Count(NonZeroU32),
    /// No limit, sent as `inf`
    #[default]
    Unbounded,
}

impl Limit {
    pub const ONE: Limit = Limit::Count(NonZeroU32::MIN);

    pub fn count(n: u32) -> Result<Self> {
        NonZeroU32::new(n).map(Limit::Count).ok_or(SdkError::InvalidLimit(n))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{}", n),
            Limit::Unbounded => f.write_str("inf"),
        }
    }
}

impl From<NonZeroU32> for Limit {
    fn from(n: NonZeroU32) -> Self {
        Limit::Count(n)
    }
}

/// A fully built request, ready to hand to an HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: &'static str,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl PreparedRequest {
    pub(crate) fn get(url: Url, auth_token: &str) -> Self {
        Self {
            method: "GET",
            url,
            headers: vec![(AUTH_HEADER.to_string(), auth_token.to_string())],
        }
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Query parameter value by name, decoded
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
