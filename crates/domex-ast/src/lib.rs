//! Typed expression tree for domex
//!
//! Trees are produced by a compiler outside this workspace and handed to the
//! engine fully resolved: every node already knows its domain type, every
//! path knows its attribute descriptors and every invocation knows its
//! function. Nothing in this crate performs lookups.
//!
//! Trees are immutable once built and may be shared between threads.

mod expression;
mod literal;
mod predicate;

pub use expression::*;
pub use literal::*;
pub use predicate::*;

/// Type alias for boxed child expressions
pub type BoxExpr = Box<Expression>;
