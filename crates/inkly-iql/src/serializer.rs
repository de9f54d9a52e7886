//! IQL serializer
//!
//! - AND: fragments of every field joined with `&`
//! - OR: each filter serialized as an AND, parenthesized, joined with `|`

use crate::error::Result;
use crate::expander::expand_field;
use inkly_core::{Filter, Where};

/// Serialize a where expression into an IQL string
pub fn serialize(expression: &Where) -> Result<String> {
    let serialized = match expression {
        Where::And(filter) => serialize_filter(filter)?,
        Where::Or(filters) => filters
            .iter()
            .map(|filter| serialize_filter(filter).map(|s| format!("({})", s)))
            .collect::<Result<Vec<_>>>()?
            .join("|"),
    };
    log::trace!("Serialized IQL: {}", serialized);
    Ok(serialized)
}

/// Serialize a single filter as an AND group
pub fn serialize_filter(filter: &Filter) -> Result<String> {
    let mut fragments = Vec::new();
    for (field, condition) in filter.iter() {
        fragments.extend(expand_field(field, condition)?);
    }
    Ok(fragments.join("&"))
}
