//! Dotted field paths (`meta.hp`)

use crate::error::{CoreError, Result};

/// Characters that may not appear in a field path
pub const RESERVED_CHARS: &[char] = &['=', '<', '>', '!', '&', '|', '(', ')', '\'', '"', '%'];

/// Check that `path` is a non-empty, dot-separated list of non-empty segments
/// free of reserved characters.
pub fn validate_field_path(path: &str) -> Result<()> {
    let invalid = |reason: &str| CoreError::InvalidFieldPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("empty path"));
    }
    if path.split('.').any(str::is_empty) {
        return Err(invalid("empty segment"));
    }
    if let Some(c) = path.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(invalid(&format!("reserved character '{}'", c)));
    }
    Ok(())
}
