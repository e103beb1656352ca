//! Equality-only interpreter for values without an order

use domex_model::{ComparisonOperatorInterpreter, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{ComparisonOperator, Value};

/// EQUAL/NOT_EQUAL for Boolean, Enum and Entity values.
///
/// Operands must be of the same kind; ordering operators are unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityOperatorInterpreter;

impl ComparisonOperatorInterpreter for EqualityOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        if !matches!(left, Value::Boolean(_) | Value::Enum(_) | Value::Entity(_)) {
            return Err(EvalError::illegal_operands(left, right));
        }
        if left.kind() != right.kind() || !operator.is_equality() {
            return Err(EvalError::unsupported_comparison(operator, left, right));
        }
        let equal = left == right;
        Ok(Some(if operator == ComparisonOperator::Equal { equal } else { !equal }))
    }
}
