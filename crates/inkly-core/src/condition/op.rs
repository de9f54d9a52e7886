//! Comparison builders
//!
//! One constructor per operator, plus [`by_name`] which resolves a builder
//! through the operator registry.

use super::types::Comparison;
use crate::error::Result;
use crate::operator::Operator;
use crate::types::Value;

pub fn equals(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::Equals, value)
}

pub fn not_equal(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::NotEqual, value)
}

pub fn less_than(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::LessThan, value)
}

pub fn greater_than(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::GreaterThan, value)
}

pub fn less_than_or_equals(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::LessThanOrEquals, value)
}

pub fn greater_than_or_equals(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::GreaterThanOrEquals, value)
}

pub fn contains(value: impl Into<Value>) -> Comparison {
    Comparison::new(Operator::Contains, value)
}

/// Alias of [`contains`]
pub fn includes(value: impl Into<Value>) -> Comparison {
    contains(value)
}

/// Look up a builder by operator name (canonical or alias)
pub fn by_name(name: &str) -> Result<impl Fn(Value) -> Comparison> {
    let operator = Operator::from_name(name)?;
    Ok(move |value: Value| Comparison::new(operator, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_builders_tag_operator() {
        assert_eq!(equals("x").operator, Operator::Equals);
        assert_eq!(not_equal("x").operator, Operator::NotEqual);
        assert_eq!(less_than(5).operator, Operator::LessThan);
        assert_eq!(greater_than(5).operator, Operator::GreaterThan);
        assert_eq!(less_than_or_equals(5).operator, Operator::LessThanOrEquals);
        assert_eq!(greater_than_or_equals(5).operator, Operator::GreaterThanOrEquals);
        assert_eq!(contains("how-to").operator, Operator::Contains);
        assert_eq!(includes("how-to"), contains("how-to"));
    }

    #[test]
    fn test_builder_keeps_value() {
        assert_eq!(less_than(12).value, Value::Number(12.0));
        assert_eq!(equals("dan").value, Value::String("dan".to_string()));
    }

    #[test]
    fn test_by_name() {
        let build = by_name("lessThan").unwrap();
        assert_eq!(build(Value::from(3)), less_than(3));

        let build = by_name("includes").unwrap();
        assert_eq!(build(Value::from("a")).operator, Operator::Contains);
    }

    #[test]
    fn test_by_name_unknown() {
        let err = by_name("before").err().unwrap();
        assert_eq!(err, CoreError::UnknownOperator("before".to_string()));
    }
}
