//! Arithmetic expressions
//!
//! Implements: signed factors and binary arithmetic. The interpreter is taken
//! from the node's own result type, not from either operand, so the result
//! type decides how mixed operands combine.

use crate::engine::{Evaluated, ExpressionEngine};
use domex_ast::{ArithmeticFactor, ChainingArithmeticExpression};
use domex_model::{Capability, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{DomainOperator, Value};

impl ExpressionEngine {
    /// Apply an arithmetic operator through the target type's interpreter
    #[allow(clippy::too_many_arguments)]
    pub fn arithmetic(
        &self,
        ctx: &EvaluationContext,
        target_type: &DomainType,
        left_type: &DomainType,
        right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        let interpreter = target_type.arithmetic_interpreter().ok_or_else(|| {
            log::debug!("type {} has no arithmetic interpreter", target_type);
            EvalError::missing_interpreter(Capability::ArithmeticInterpreter.name(), target_type.name())
        })?;
        interpreter.interpret(ctx, target_type, left_type, right_type, left, right, operator)
    }

    /// `-expr` / `+expr`
    ///
    /// Sign inversion is UNARY_MINUS with the operand passed as both sides.
    /// The result never carries an adapter.
    pub fn eval_arithmetic_factor(&self, factor: &ArithmeticFactor, ctx: &EvaluationContext) -> EvalResult<Evaluated> {
        let value = self.eval(&factor.expression, ctx)?.value;
        if value.is_null() || !factor.invert_signum {
            return Ok(Evaluated::plain(value));
        }
        let ty = &factor.domain_type;
        let inverted = self.arithmetic(ctx, ty, ty, ty, &value, &value, DomainOperator::UnaryMinus)?;
        Ok(Evaluated::plain(inverted))
    }

    /// `left <op> right`; an absent left side skips evaluating the right one
    pub fn eval_chaining_arithmetic(
        &self,
        expr: &ChainingArithmeticExpression,
        ctx: &EvaluationContext,
    ) -> EvalResult<Evaluated> {
        let left = self.eval(&expr.left, ctx)?.value;
        if left.is_null() {
            return Ok(Evaluated::unknown());
        }
        let right = self.eval(&expr.right, ctx)?.value;
        if right.is_null() {
            return Ok(Evaluated::unknown());
        }
        let value = self.arithmetic(
            ctx,
            &expr.domain_type,
            expr.left.domain_type(),
            expr.right.domain_type(),
            &left,
            &right,
            expr.operator,
        )?;
        Ok(Evaluated::plain(value))
    }
}
