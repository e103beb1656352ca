//! Typed domain expression evaluation for Rust
//!
//! This crate bundles the domex workspace:
//! - `types`: runtime values, intervals and operator enums
//! - `model`: domain descriptors, capability contracts and the model registry
//! - `ast`: the typed expression tree
//! - `eval`: the evaluation engine and the built-in interpreters
//!
//! # Example
//!
//! ```ignore
//! use domex::prelude::*;
//! use std::sync::Arc;
//!
//! let mut builder = standard_model();
//! let integer = builder.domain_type("Integer").cloned().unwrap();
//! let model = Arc::new(builder.build());
//!
//! let sum = ChainingArithmeticExpression::new(
//!     integer.clone(),
//!     Literal::scalar(integer.clone(), 1i64).into(),
//!     Literal::scalar(integer, 2i64).into(),
//!     DomainOperator::Plus,
//! );
//! let engine = ExpressionEngine::new(model);
//! assert_eq!(engine.evaluate(&sum.into(), None)?, Value::Integer(3));
//! ```

// Re-export all public APIs from internal crates
pub use domex_ast as ast;
pub use domex_eval as eval;
pub use domex_model as model;
pub use domex_types as types;

// Convenience re-exports
pub use domex_eval::{EvalError, EvalResult, EvaluationContext, ExpressionEngine, standard_model};

/// Everything needed to declare a domain, build trees and evaluate them
pub mod prelude {
    pub use domex_ast::{
        ArgumentBinding, ArithmeticFactor, BetweenPredicate, ChainingArithmeticExpression, ComparisonPredicate,
        CompoundPredicate, Expression, ExpressionPredicate, FunctionInvocation, InPredicate, IsEmptyPredicate,
        IsNullPredicate, Literal, LiteralValue, Path, PathBase, Predicate,
    };
    pub use domex_eval::builtin::{EntityAttributeAccessor, EpochMillisTypeAdapter, IdentityTypeAdapter};
    pub use domex_eval::{Evaluated, ExpressionEngine, standard_model};
    pub use domex_model::{
        AttributeAccessor, ComparisonOperatorInterpreter, DomainFunction, DomainFunctionArguments, DomainModel,
        DomainModelBuilder, DomainOperatorInterpreter, DomainType, DomainTypeRef, EntityAttribute, EvalError,
        EvalResult, EvaluationContext, FunctionInvoker, TypeAdapter, TypeConverter,
    };
    pub use domex_types::{
        ComparisonOperator, DomainOperator, EntityValue, EnumValue, TemporalInterval, Value, ValueKind,
    };
}
