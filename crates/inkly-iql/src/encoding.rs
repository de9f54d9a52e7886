//! Percent encoding for IQL literals
//!
//! Every character outside `A-Z a-z 0-9 - _ . ~` is escaped, so none of the
//! grammar's reserved characters survive inside a literal. Bare tokens also
//! escape `-`, otherwise `'f'<-5` would read as `contains 5`.

use inkly_core::Literal;
use std::borrow::Cow;

/// Encode a literal for the wire: strings are quoted, numbers and booleans bare
pub fn encode_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(s) => format!("\"{}\"", urlencoding::encode(s)),
        Literal::Number(n) => encode_bare(&n.to_string()),
        Literal::Bool(b) => encode_bare(&b.to_string()),
    }
}

fn encode_bare(token: &str) -> String {
    urlencoding::encode(token).replace('-', "%2D")
}

/// Percent-decode a wire token, keeping the raw text if it is not valid UTF-8
pub fn decode(token: &str) -> Cow<'_, str> {
    match urlencoding::decode(token) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::debug!("Keeping undecodable token {:?}: {}", token, e);
            Cow::Borrowed(token)
        }
    }
}
