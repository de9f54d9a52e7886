//! Parsed IQL conditions

use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// A typed operand recovered from the wire
///
/// Field references and string literals stay distinct so callers can tell
/// `'name'` from `"name"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Operand {
    Field(String),
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Operand {
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Operand::Field(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Operand::Field(_))
    }
}

/// One parsed `left <operation> right` clause
///
/// A clause with no recognizable operator keeps its raw text as a string
/// operand on the left, with `operation` and `right` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub operation: Option<Operator>,
    pub left: Operand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Operand>,
}

impl Clause {
    pub fn new(operation: Operator, left: Operand, right: Operand) -> Self {
        Self {
            operation: Some(operation),
            left,
            right: Some(right),
        }
    }

    /// Wrap text that did not contain an operator
    pub fn malformed(text: impl Into<String>) -> Self {
        Self {
            operation: None,
            left: Operand::String(text.into()),
            right: None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.operation.is_none()
    }
}

/// Clauses that must all hold
pub type AndGroup = Vec<Clause>;

/// Groups of which any may hold
pub type DeserializedExpression = Vec<AndGroup>;
