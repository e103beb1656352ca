//! Comparison predicates
//!
//! Implements: binary comparison, BETWEEN and IN. Every comparison is
//! delegated to the comparison interpreter of the LEFT operand's type.

use crate::engine::ExpressionEngine;
use domex_ast::{BetweenPredicate, ComparisonPredicate, InPredicate};
use domex_model::{Capability, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{ComparisonOperator, Value};

impl ExpressionEngine {
    /// Compare two present values through the left type's interpreter
    pub fn compare(
        &self,
        ctx: &EvaluationContext,
        left_type: &DomainType,
        right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        let interpreter = left_type.comparison_interpreter().ok_or_else(|| {
            log::debug!("type {} has no comparison interpreter", left_type);
            EvalError::missing_interpreter(Capability::ComparisonInterpreter.name(), left_type.name())
        })?;
        interpreter.interpret(ctx, left_type, right_type, left, right, operator)
    }

    /// `left <op> right`; either side absent is unknown
    pub fn eval_comparison(&self, predicate: &ComparisonPredicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        let left = self.eval(&predicate.left, ctx)?.value;
        if left.is_null() {
            return Ok(None);
        }
        let right = self.eval(&predicate.right, ctx)?.value;
        if right.is_null() {
            return Ok(None);
        }
        let result = self.compare(
            ctx,
            predicate.left.domain_type(),
            predicate.right.domain_type(),
            &left,
            &right,
            predicate.operator,
        )?;
        Ok(result.map(|b| b != predicate.negated))
    }

    /// `left [NOT] BETWEEN lower AND upper`
    ///
    /// The bounds are checked in order and the first check that already
    /// decides the outcome ends the evaluation. NOT BETWEEN checks the
    /// complementary comparisons (`left < lower`, then `left > upper`).
    pub fn eval_between(&self, predicate: &BetweenPredicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        let left = self.eval(&predicate.left, ctx)?.value;
        if left.is_null() {
            return Ok(None);
        }
        let lower = self.eval(&predicate.lower, ctx)?.value;
        if lower.is_null() {
            return Ok(None);
        }
        let upper = self.eval(&predicate.upper, ctx)?.value;
        if upper.is_null() {
            return Ok(None);
        }

        let test_value = predicate.negated;
        let (lower_op, upper_op) = if test_value {
            (ComparisonOperator::Lower, ComparisonOperator::Greater)
        } else {
            (ComparisonOperator::GreaterOrEqual, ComparisonOperator::LowerOrEqual)
        };
        let left_type = predicate.left.domain_type();
        let bounds = [
            (predicate.lower.domain_type(), &lower, lower_op),
            (predicate.upper.domain_type(), &upper, upper_op),
        ];
        for (bound_type, bound, operator) in bounds {
            match self.compare(ctx, left_type, bound_type, &left, bound, operator)? {
                None => return Ok(None),
                Some(b) if b == test_value => return Ok(Some(test_value)),
                Some(_) => {}
            }
        }
        Ok(Some(!test_value))
    }

    /// `left [NOT] IN (items...)`
    ///
    /// Items are evaluated lazily in order; an absent item makes the whole
    /// predicate unknown. NOT IN compares with NOT_EQUAL.
    pub fn eval_in(&self, predicate: &InPredicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        let left = self.eval(&predicate.left, ctx)?.value;
        if left.is_null() {
            return Ok(None);
        }
        let test_value = predicate.negated;
        let operator = if test_value {
            ComparisonOperator::NotEqual
        } else {
            ComparisonOperator::Equal
        };
        let left_type = predicate.left.domain_type();
        for item in &predicate.items {
            let value = self.eval(item, ctx)?.value;
            if value.is_null() {
                return Ok(None);
            }
            let result = self.compare(ctx, left_type, item.domain_type(), &left, &value, operator)?;
            if result != Some(test_value) {
                return Ok(result);
            }
        }
        Ok(Some(test_value))
    }
}
