//! Scalar literals carried on the wire

use super::value::Value;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A string, number or boolean literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    String(String),
}

impl TryFrom<&Value> for Literal {
    type Error = CoreError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Literal::Bool(*b)),
            Value::Number(n) if n.is_finite() => Ok(Literal::Number(*n)),
            Value::Number(n) => Err(CoreError::UnsupportedValueType(format!(
                "non-finite number ({})",
                n
            ))),
            Value::String(s) => Ok(Literal::String(s.clone())),
            other => Err(CoreError::UnsupportedValueType(other.type_name().to_string())),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_scalars_convert() {
        assert_eq!(Literal::try_from(&Value::from(true)).unwrap(), Literal::Bool(true));
        assert_eq!(Literal::try_from(&Value::from(50)).unwrap(), Literal::Number(50.0));
        assert_eq!(
            Literal::try_from(&Value::from("doe")).unwrap(),
            Literal::String("doe".to_string())
        );
    }

    #[test]
    fn test_non_scalars_are_rejected_by_type_name() {
        let cases = [
            (Value::Null, "null"),
            (Value::from(vec![1]), "array"),
            (Value::Object(HashMap::new()), "object"),
        ];
        for (value, name) in cases {
            let err = Literal::try_from(&value).unwrap_err();
            assert_eq!(err, CoreError::UnsupportedValueType(name.to_string()));
        }
    }

    #[test]
    fn test_non_finite_number_is_rejected() {
        let err = Literal::try_from(&Value::Number(f64::NAN)).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedValueType(ref msg) if msg.contains("NaN")));
    }
}
