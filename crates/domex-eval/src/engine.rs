//! Expression evaluation engine
//!
//! This module provides the `ExpressionEngine`, a depth-first walker over the
//! typed expression tree. Every node visit returns an [`Evaluated`]: the value
//! together with the type adapter selected by the leaf that produced it. The
//! adapter travels as a return value, so the engine itself holds no
//! per-evaluation state and one instance may serve concurrent evaluations.

use domex_ast::{Expression, FunctionInvocation, Literal, LiteralValue, Path, PathBase, Predicate};
use domex_model::{
    DomainFunctionArguments, DomainModel, EvalError, EvalResult, EvaluationContext, TypeAdapter,
};
use domex_types::{Value, ValueKind};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Context used when a caller does not supply one
static EMPTY_CONTEXT: Lazy<EvaluationContext> = Lazy::new(EvaluationContext::default);

/// Result of visiting one node
#[derive(Clone)]
pub struct Evaluated {
    /// Value in its internal representation
    pub value: Value,
    /// Adapter that converts `value` back to its model representation
    pub adapter: Option<Arc<dyn TypeAdapter>>,
}

impl Evaluated {
    /// Value with no adapter in effect
    pub fn plain(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            adapter: None,
        }
    }

    /// Value produced under the given adapter
    pub fn adapted(value: Value, adapter: Option<&Arc<dyn TypeAdapter>>) -> Self {
        Self {
            value,
            adapter: adapter.cloned(),
        }
    }

    pub fn unknown() -> Self {
        Self::plain(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl fmt::Debug for Evaluated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluated")
            .field("value", &self.value)
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

/// The expression evaluation engine
///
/// The engine only reads the domain model. Cloning it is cheap and every
/// clone shares the same model.
#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    model: Arc<DomainModel>,
}

impl ExpressionEngine {
    /// Create an engine over a built domain model
    pub fn new(model: Arc<DomainModel>) -> Self {
        Self { model }
    }

    /// The domain model this engine resolves converters against
    pub fn model(&self) -> &DomainModel {
        &self.model
    }

    /// Evaluate to the internal representation
    pub fn evaluate(&self, expr: &Expression, ctx: Option<&EvaluationContext>) -> EvalResult<Value> {
        log::trace!("evaluate {}", expr.domain_type());
        Ok(self.eval(expr, ctx.unwrap_or(&EMPTY_CONTEXT))?.value)
    }

    /// Evaluate to the model representation.
    ///
    /// The adapter selected by the outermost leaf, if any, converts the result
    /// with `to_model_type` after the walk completes.
    pub fn evaluate_as_model_type(&self, expr: &Expression, ctx: Option<&EvaluationContext>) -> EvalResult<Value> {
        log::trace!("evaluate_as_model_type {}", expr.domain_type());
        let ctx = ctx.unwrap_or(&EMPTY_CONTEXT);
        let result = self.eval(expr, ctx)?;
        match result.adapter {
            Some(adapter) => {
                log::debug!("applying model adapter of {}", expr.domain_type());
                adapter.to_model_type(ctx, result.value, expr.domain_type())
            }
            None => Ok(result.value),
        }
    }

    /// Evaluate and coerce the result into the requested shape.
    ///
    /// Null and values already of the requested kind are returned unchanged.
    /// Anything else goes through the model's converter for the
    /// `(produced kind, requested kind)` pair.
    pub fn evaluate_as(
        &self,
        expr: &Expression,
        ctx: Option<&EvaluationContext>,
        kind: ValueKind,
    ) -> EvalResult<Value> {
        log::trace!("evaluate_as {} -> {}", expr.domain_type(), kind);
        let ctx = ctx.unwrap_or(&EMPTY_CONTEXT);
        let value = self.eval(expr, ctx)?.value;
        let Some(from) = value.kind() else {
            return Ok(value);
        };
        if from == kind {
            return Ok(value);
        }
        let converter = self.model.converter(from, kind).ok_or_else(|| {
            log::debug!("no converter registered for {} -> {}", from, kind);
            EvalError::NoConverter { from, to: kind }
        })?;
        log::debug!("converting {} -> {}", from, kind);
        converter.convert(ctx, value, expr.domain_type())
    }

    /// Evaluate a predicate to a strict boolean; unknown becomes `false`
    pub fn evaluate_predicate(&self, predicate: &Predicate, ctx: Option<&EvaluationContext>) -> EvalResult<bool> {
        log::trace!("evaluate_predicate");
        let result = self.eval_predicate(predicate, ctx.unwrap_or(&EMPTY_CONTEXT))?;
        Ok(result == Some(true))
    }

    /// Main node dispatcher
    pub fn eval(&self, expr: &Expression, ctx: &EvaluationContext) -> EvalResult<Evaluated> {
        match expr {
            // === Leaves ===
            Expression::Literal(e) => self.eval_literal(e, ctx),
            Expression::Path(e) => self.eval_path(e, ctx),
            Expression::FunctionInvocation(e) => self.eval_function_invocation(e, ctx),

            // === Arithmetic ===
            Expression::ArithmeticFactor(e) => self.eval_arithmetic_factor(e, ctx),
            Expression::ChainingArithmetic(e) => self.eval_chaining_arithmetic(e, ctx),

            // === Predicates ===
            Expression::Predicate(p) => Ok(Evaluated::plain(self.eval_predicate(p, ctx)?)),
        }
    }

    /// Predicate dispatcher; `None` is unknown
    pub fn eval_predicate(&self, predicate: &Predicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        match predicate {
            Predicate::Comparison(p) => self.eval_comparison(p, ctx),
            Predicate::Between(p) => self.eval_between(p, ctx),
            Predicate::In(p) => self.eval_in(p, ctx),
            Predicate::Compound(p) => self.eval_compound(p, ctx),
            Predicate::IsNull(p) => self.eval_is_null(p, ctx).map(Some),
            Predicate::IsEmpty(p) => self.eval_is_empty(p, ctx),
            Predicate::Expression(p) => self.eval_expression_predicate(p, ctx),
        }
    }

    /// Evaluate a literal.
    ///
    /// Collection literals evaluate every element expression in order. An
    /// empty collection carries no adapter; a non-empty one carries the
    /// collection type's adapter, never an element adapter.
    pub fn eval_literal(&self, literal: &Literal, ctx: &EvaluationContext) -> EvalResult<Evaluated> {
        let ty = &literal.domain_type;
        match &literal.value {
            LiteralValue::Scalar(value) => Ok(Evaluated::adapted(value.clone(), ty.adapter())),
            LiteralValue::Collection(elements) if elements.is_empty() => {
                Ok(Evaluated::plain(Value::Collection(Vec::new())))
            }
            LiteralValue::Collection(elements) => {
                let values = elements
                    .iter()
                    .map(|e| self.eval(e, ctx).map(|r| r.value))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Evaluated::adapted(Value::Collection(values), ty.adapter()))
            }
        }
    }

    /// Evaluate an attribute path.
    ///
    /// An absent intermediate value makes the whole path absent. The adapter
    /// of the last attribute read is the adapter of the result.
    pub fn eval_path(&self, path: &Path, ctx: &EvaluationContext) -> EvalResult<Evaluated> {
        let mut value = match &path.base {
            PathBase::Root(alias) => ctx
                .root(alias)
                .cloned()
                .ok_or_else(|| EvalError::unbound_root(alias))?,
            PathBase::Expression(base) => self.eval(base, ctx)?.value,
        };

        let mut adapter = None;
        for attribute in &path.attributes {
            if value.is_null() {
                return Ok(Evaluated::unknown());
            }
            let accessor = attribute
                .accessor()
                .ok_or_else(|| EvalError::missing_accessor(attribute.owner(), attribute.name()))?;
            value = accessor.get_attribute(ctx, &value, attribute)?;
            adapter = attribute.adapter();
            if let Some(adapter) = adapter {
                value = adapter.to_internal_type(ctx, value, attribute.domain_type())?;
            }
        }
        Ok(Evaluated::adapted(value, adapter))
    }

    /// Evaluate a function invocation.
    ///
    /// Arguments are evaluated in binding order, converted to their model
    /// representation and placed at their declared positions. The invoker
    /// always sees a view sized to the declared arity.
    pub fn eval_function_invocation(
        &self,
        invocation: &FunctionInvocation,
        ctx: &EvaluationContext,
    ) -> EvalResult<Evaluated> {
        let function = &invocation.function;
        let invoker = function
            .invoker()
            .ok_or_else(|| EvalError::missing_invoker(function.name()))?;

        let mut arguments = DomainFunctionArguments::with_arity(function.arity());
        for binding in &invocation.arguments {
            let mut value = self.eval(&binding.expression, ctx)?.value;
            if let Some(adapter) = binding.argument.adapter() {
                value = adapter.to_model_type(ctx, value, binding.argument.domain_type())?;
            }
            arguments.assign(
                binding.argument.position(),
                value,
                binding.expression.domain_type().clone(),
            )?;
        }

        let adapter = function.result_adapter();
        let mut result = invoker.invoke(ctx, function, &arguments)?;
        if let Some(adapter) = adapter {
            result = adapter.to_internal_type(ctx, result, function.result_type())?;
        }
        Ok(Evaluated::adapted(result, adapter))
    }
}
