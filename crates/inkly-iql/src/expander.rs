//! Condition expansion
//!
//! Turns one filter field into wire fragments, one per leaf condition:
//! bare values become `equals`, nested filters recurse with dotted paths.

use crate::encoding::encode_literal;
use crate::error::Result;
use inkly_core::types::validate_field_path;
use inkly_core::{FieldCondition, Literal, Operator, Value};

/// Expand `field` into its wire fragments, in field insertion order
pub fn expand_field(field: &str, condition: &FieldCondition) -> Result<Vec<String>> {
    let mut fragments = Vec::new();
    expand_into(field, condition, &mut fragments)?;
    Ok(fragments)
}

fn expand_into(field: &str, condition: &FieldCondition, out: &mut Vec<String>) -> Result<()> {
    match condition {
        FieldCondition::Value(value) => out.push(render_leaf(field, Operator::Equals, value)?),
        FieldCondition::Compare(comparison) => {
            out.push(render_leaf(field, comparison.operator, &comparison.value)?)
        }
        FieldCondition::Nested(filter) => {
            for (sub_field, sub_condition) in filter.iter() {
                expand_into(&format!("{}.{}", field, sub_field), sub_condition, out)?;
            }
        }
    }
    Ok(())
}

fn render_leaf(field: &str, operator: Operator, value: &Value) -> Result<String> {
    validate_field_path(field)?;
    let literal = Literal::try_from(value)?;
    Ok(operator.render(field, &encode_literal(&literal)))
}
