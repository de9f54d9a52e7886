//! Operator registry for IQL conditions
//!
//! Every operator has exactly one entry in [`REGISTRY`]. Name lookup (used when
//! building conditions) and token lookup (used when parsing wire strings) are
//! both derived from that list, so the two directions cannot drift apart.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Equal (=)
    Equals,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Greater than (>)
    GreaterThan,
    /// Less than or equal (<=)
    LessThanOrEquals,
    /// Greater than or equal (>=)
    GreaterThanOrEquals,
    /// Membership / substring (<-)
    Contains,
}

/// A registry entry: the operator, its accepted names and its wire token.
///
/// The first name is canonical.
#[derive(Debug)]
pub struct OperatorEntry {
    pub operator: Operator,
    pub names: &'static [&'static str],
    pub token: &'static str,
}

/// Entries are ordered by `Operator` discriminant.
pub const REGISTRY: &[OperatorEntry] = &[
    OperatorEntry {
        operator: Operator::Equals,
        names: &["equals", "eq"],
        token: "=",
    },
    OperatorEntry {
        operator: Operator::NotEqual,
        names: &["notEqual", "ne"],
        token: "!=",
    },
    OperatorEntry {
        operator: Operator::LessThan,
        names: &["lessThan", "lt"],
        token: "<",
    },
    OperatorEntry {
        operator: Operator::GreaterThan,
        names: &["greaterThan", "gt"],
        token: ">",
    },
    OperatorEntry {
        operator: Operator::LessThanOrEquals,
        names: &["lessThanOrEquals", "le"],
        token: "<=",
    },
    OperatorEntry {
        operator: Operator::GreaterThanOrEquals,
        names: &["greaterThanOrEquals", "ge"],
        token: ">=",
    },
    OperatorEntry {
        operator: Operator::Contains,
        names: &["contains", "includes"],
        token: "<-",
    },
];

fn names() -> &'static HashMap<&'static str, Operator> {
    static NAMES: OnceLock<HashMap<&'static str, Operator>> = OnceLock::new();
    NAMES.get_or_init(|| {
        REGISTRY
            .iter()
            .flat_map(|entry| entry.names.iter().map(move |name| (*name, entry.operator)))
            .collect()
    })
}

fn tokens() -> &'static HashMap<&'static str, Operator> {
    static TOKENS: OnceLock<HashMap<&'static str, Operator>> = OnceLock::new();
    TOKENS.get_or_init(|| REGISTRY.iter().map(|entry| (entry.token, entry.operator)).collect())
}

impl Operator {
    /// All operators in registry order
    pub fn all() -> impl Iterator<Item = Operator> {
        REGISTRY.iter().map(|entry| entry.operator)
    }

    fn entry(&self) -> &'static OperatorEntry {
        &REGISTRY[*self as usize]
    }

    /// Canonical operator name (e.g. `lessThan`)
    pub fn name(&self) -> &'static str {
        self.entry().names[0]
    }

    /// Wire token (e.g. `<`)
    pub fn token(&self) -> &'static str {
        self.entry().token
    }

    /// Resolve an operator by canonical name or alias
    pub fn from_name(name: &str) -> Result<Operator> {
        names()
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownOperator(name.to_string()))
    }

    /// Resolve an operator by its wire token
    pub fn from_token(token: &str) -> Option<Operator> {
        tokens().get(token).copied()
    }

    /// Wire tokens ordered longest first, so `<=` is tried before `<`
    pub fn tokens_longest_first() -> Vec<&'static str> {
        let mut tokens: Vec<_> = REGISTRY.iter().map(|entry| entry.token).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        tokens
    }

    /// Render a condition fragment: `'<field>'<token><encoded value>`
    pub fn render(&self, field: &str, encoded_value: &str) -> String {
        format!("'{}'{}{}", field, self.token(), encoded_value)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::from_name(s)
    }
}
