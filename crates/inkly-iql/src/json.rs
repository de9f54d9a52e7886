//! Filters given as JSON
//!
//! An object is a single filter, an array of objects is an OR. Inside a
//! filter, an object holding both an operator key and a value key
//! (`operator`/`value`, or `_operator`/`_value`) is a comparison; any other
//! object is a nested filter.

use crate::error::{IqlError, Result};
use crate::serializer::serialize;
use inkly_core::{Comparison, CoreError, FieldCondition, Filter, Operator, Value, Where};
use serde_json::{Map, Value as JsonValue};

const OPERATOR_KEYS: [&str; 2] = ["operator", "_operator"];
const VALUE_KEYS: [&str; 2] = ["value", "_value"];

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Convert a JSON filter object, or array of them, into a [`Where`]
pub fn where_from_json(value: &JsonValue) -> Result<Where> {
    match value {
        JsonValue::Object(map) => Ok(Where::And(filter_from_json(map)?)),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Object(map) => filter_from_json(map),
                other => Err(IqlError::InvalidFilter(format!(
                    "OR members must be objects, got {}",
                    json_type_name(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Where::Or),
        other => Err(IqlError::InvalidFilter(format!(
            "expected an object or an array of objects, got {}",
            json_type_name(other)
        ))),
    }
}

/// Serialize a JSON filter straight to IQL
pub fn serialize_json(value: &JsonValue) -> Result<String> {
    serialize(&where_from_json(value)?)
}

fn filter_from_json(map: &Map<String, JsonValue>) -> Result<Filter> {
    let mut filter = Filter::new();
    for (name, value) in map {
        filter.insert(name.clone(), field_condition_from_json(value)?);
    }
    Ok(filter)
}

fn find_key<'a>(map: &'a Map<String, JsonValue>, keys: &[&str]) -> Option<&'a JsonValue> {
    keys.iter().find_map(|key| map.get(*key))
}

fn field_condition_from_json(value: &JsonValue) -> Result<FieldCondition> {
    let JsonValue::Object(map) = value else {
        return Ok(FieldCondition::Value(Value::from(value.clone())));
    };

    match (find_key(map, &OPERATOR_KEYS), find_key(map, &VALUE_KEYS)) {
        (Some(operator), Some(operand)) => {
            let operator = match operator {
                JsonValue::String(name) => Operator::from_name(name)?,
                other => return Err(CoreError::UnknownOperator(other.to_string()).into()),
            };
            Ok(FieldCondition::Compare(Comparison::new(operator, Value::from(operand.clone()))))
        }
        _ => Ok(FieldCondition::Nested(filter_from_json(map)?)),
    }
}
