//! domex evaluation engine
//!
//! This crate evaluates typed expression trees against a domain model:
//!
//! - **Predicates** with three-valued logic: comparison, BETWEEN, IN,
//!   AND/OR, IS NULL, IS EMPTY, boolean expressions
//! - **Arithmetic** delegated to the interpreter of the result type
//! - **Paths** navigated through attribute accessors
//! - **Function invocations** through function invokers
//! - **Adapters** converting between model and internal representations
//!
//! # Example
//!
//! ```ignore
//! use domex_eval::{ExpressionEngine, standard_model};
//! use std::sync::Arc;
//!
//! let model = Arc::new(standard_model().build());
//! let engine = ExpressionEngine::new(model);
//! let value = engine.evaluate(&expression, Some(&ctx))?;
//! ```
//!
//! # Three-Valued Logic
//!
//! An absent value (`Value::Null`) is unknown, never an error. Comparisons
//! with an absent side are unknown; AND/OR stop at the first unknown member.
//! `evaluate_predicate` maps unknown to `false` for callers that need a plain
//! boolean.
//!
//! # Concurrency
//!
//! `ExpressionEngine` is `Send + Sync` and keeps no per-evaluation state. Each
//! top-level call owns its own evaluation frame, so one engine (or one per
//! thread) can run concurrent evaluations over a shared model as long as each
//! evaluation gets its own `EvaluationContext`.

pub mod builtin;
pub mod engine;
pub mod operators;

pub use builtin::standard_model;
pub use engine::{Evaluated, ExpressionEngine};
pub use domex_model::{EvalError, EvalResult, EvaluationContext};
