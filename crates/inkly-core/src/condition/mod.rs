//! Condition trees
//!
//! Input side: a [`Where`] expression is either one [`Filter`] (all fields
//! must match) or a list of filters (any filter may match). Each filter maps
//! field names to a bare value (implicit equals), an explicit [`Comparison`]
//! or a nested filter whose fields are addressed as `parent.child`.
//!
//! ```rust,ignore
//! use inkly_core::{op, Filter, Where};
//!
//! let expr = Where::from(vec![
//!     Filter::new().field("lastName", "doe").field("age", op::greater_than(50)),
//!     Filter::new().field("lastName", "doe").field("isBanned", false),
//! ]);
//! ```
//!
//! Output side: parsing an IQL string yields a [`DeserializedExpression`], a
//! list of [`AndGroup`]s whose [`Clause`]s carry typed [`Operand`]s.

pub mod op;
mod parsed;
mod types;

pub use parsed::{AndGroup, Clause, DeserializedExpression, Operand};
pub use types::{Comparison, FieldCondition, Filter, Where};
