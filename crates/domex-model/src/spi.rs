//! Capability contracts the engine calls out to
//!
//! Each domain type, attribute and function carries the implementations of
//! these traits it needs in explicit slots (see [`crate::domain`]). The engine
//! never matches on a value's native kind to compare or compute; it asks the
//! relevant descriptor for its implementation instead.
//!
//! Every trait is `Send + Sync` so a built domain model can be shared across
//! threads. Closures with the matching signature implement the traits whose
//! single method takes no `&self` state beyond the closure itself.

use crate::arguments::DomainFunctionArguments;
use crate::context::EvaluationContext;
use crate::domain::{DomainFunction, DomainType, EntityAttribute};
use crate::error::EvalResult;
use domex_types::{ComparisonOperator, DomainOperator, Value};

/// Comparison semantics for values of one domain type.
///
/// Resolved from the left operand's type. Returns `Ok(None)` when the result
/// is unknown.
pub trait ComparisonOperatorInterpreter: Send + Sync {
    fn interpret(
        &self,
        ctx: &EvaluationContext,
        left_type: &DomainType,
        right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>>;
}

/// Arithmetic semantics, resolved from the result type of the expression.
///
/// For unary operators the engine passes the operand as both `left` and
/// `right`.
pub trait DomainOperatorInterpreter: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn interpret(
        &self,
        ctx: &EvaluationContext,
        target_type: &DomainType,
        left_type: &DomainType,
        right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value>;
}

/// Conversion between the model representation (what callers see) and the
/// internal representation (what interpreters operate on).
pub trait TypeAdapter: Send + Sync {
    fn to_internal_type(&self, ctx: &EvaluationContext, value: Value, domain_type: &DomainType) -> EvalResult<Value>;

    fn to_model_type(&self, ctx: &EvaluationContext, value: Value, domain_type: &DomainType) -> EvalResult<Value>;
}

/// Reads one attribute from a non-null owner value
pub trait AttributeAccessor: Send + Sync {
    fn get_attribute(&self, ctx: &EvaluationContext, value: &Value, attribute: &EntityAttribute) -> EvalResult<Value>;
}

impl<F> AttributeAccessor for F
where
    F: Fn(&EvaluationContext, &Value, &EntityAttribute) -> EvalResult<Value> + Send + Sync,
{
    fn get_attribute(&self, ctx: &EvaluationContext, value: &Value, attribute: &EntityAttribute) -> EvalResult<Value> {
        self(ctx, value, attribute)
    }
}

/// Executes a domain function over its positional arguments
pub trait FunctionInvoker: Send + Sync {
    fn invoke(
        &self,
        ctx: &EvaluationContext,
        function: &DomainFunction,
        arguments: &DomainFunctionArguments,
    ) -> EvalResult<Value>;
}

impl<F> FunctionInvoker for F
where
    F: Fn(&EvaluationContext, &DomainFunction, &DomainFunctionArguments) -> EvalResult<Value> + Send + Sync,
{
    fn invoke(
        &self,
        ctx: &EvaluationContext,
        function: &DomainFunction,
        arguments: &DomainFunctionArguments,
    ) -> EvalResult<Value> {
        self(ctx, function, arguments)
    }
}

/// Converts a produced value into a requested shape
pub trait TypeConverter: Send + Sync {
    fn convert(&self, ctx: &EvaluationContext, value: Value, domain_type: &DomainType) -> EvalResult<Value>;
}

impl<F> TypeConverter for F
where
    F: Fn(&EvaluationContext, Value, &DomainType) -> EvalResult<Value> + Send + Sync,
{
    fn convert(&self, ctx: &EvaluationContext, value: Value, domain_type: &DomainType) -> EvalResult<Value> {
        self(ctx, value, domain_type)
    }
}
