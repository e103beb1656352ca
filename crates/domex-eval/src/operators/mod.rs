//! Engine-level operator evaluation
//!
//! This module extends `ExpressionEngine` with the node kinds that combine
//! other nodes:
//! - Arithmetic (signed factors, binary arithmetic)
//! - Comparison (comparison, BETWEEN, IN)
//! - Logical (AND/OR, IS NULL, IS EMPTY, boolean expressions)
//!
//! The semantics of the values themselves live in the interpreters under
//! `builtin`, or in whatever the domain model registers instead.

pub mod arithmetic;
pub mod comparison;
pub mod logical;
