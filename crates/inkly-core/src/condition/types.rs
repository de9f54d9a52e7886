//! Input condition types

use crate::operator::Operator;
use crate::types::{Literal, Value};

/// An explicit `{operator, value}` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub operator: Operator,
    pub value: Value,
}

impl Comparison {
    pub fn new(operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }
}

/// What a filter field maps to
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCondition {
    /// Bare value, shorthand for `equals`
    Value(Value),
    /// Explicit comparison
    Compare(Comparison),
    /// Nested filter over sub-fields
    Nested(Filter),
}

impl From<Comparison> for FieldCondition {
    fn from(c: Comparison) -> Self {
        FieldCondition::Compare(c)
    }
}

impl From<Filter> for FieldCondition {
    fn from(f: Filter) -> Self {
        FieldCondition::Nested(f)
    }
}

impl From<Value> for FieldCondition {
    fn from(v: Value) -> Self {
        FieldCondition::Value(v)
    }
}

impl From<Literal> for FieldCondition {
    fn from(l: Literal) -> Self {
        FieldCondition::Value(l.into())
    }
}

macro_rules! field_condition_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldCondition {
                fn from(v: $ty) -> Self {
                    FieldCondition::Value(Value::from(v))
                }
            }
        )*
    };
}

field_condition_from_scalar!(bool, f64, i32, i64, u32, &str, String);

/// An ordered set of field conditions, all of which must hold
///
/// Fields keep insertion order; inserting an existing name replaces its
/// condition in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    fields: Vec<(String, FieldCondition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder style)
    pub fn field(mut self, name: impl Into<String>, condition: impl Into<FieldCondition>) -> Self {
        self.insert(name, condition);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, condition: impl Into<FieldCondition>) {
        let name = name.into();
        let condition = condition.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = condition,
            None => self.fields.push((name, condition)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldCondition> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, condition)| condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldCondition)> {
        self.fields.iter().map(|(name, condition)| (name.as_str(), condition))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A where expression: one filter (AND) or a list of filters (OR of ANDs)
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    And(Filter),
    Or(Vec<Filter>),
}

impl From<Filter> for Where {
    fn from(f: Filter) -> Self {
        Where::And(f)
    }
}

impl From<Vec<Filter>> for Where {
    fn from(filters: Vec<Filter>) -> Self {
        Where::Or(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::op;

    #[test]
    fn test_filter_keeps_insertion_order() {
        let filter = Filter::new()
            .field("lastName", "doe")
            .field("age", op::greater_than(50))
            .field("isBanned", false);

        let names: Vec<_> = filter.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["lastName", "age", "isBanned"]);
    }

    #[test]
    fn test_filter_insert_replaces_in_place() {
        let mut filter = Filter::new().field("a", 1).field("b", 2);
        filter.insert("a", "x");

        assert_eq!(filter.len(), 2);
        assert_eq!(filter.iter().next().map(|(n, _)| n), Some("a"));
        assert_eq!(filter.get("a"), Some(&FieldCondition::Value(Value::from("x"))));
    }

    #[test]
    fn test_field_condition_conversions() {
        assert!(matches!(FieldCondition::from(12), FieldCondition::Value(Value::Number(_))));
        assert!(matches!(FieldCondition::from(op::less_than(12)), FieldCondition::Compare(_)));
        assert!(matches!(
            FieldCondition::from(Filter::new().field("hp", 1)),
            FieldCondition::Nested(_)
        ));
    }

    #[test]
    fn test_where_conversions() {
        assert!(matches!(Where::from(Filter::new()), Where::And(_)));
        match Where::from(vec![Filter::new()]) {
            Where::Or(filters) => assert_eq!(filters.len(), 1),
            other => panic!("Expected Or, got {:?}", other),
        }
    }
}
