//! String interpreter

use domex_model::{ComparisonOperatorInterpreter, DomainOperatorInterpreter, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{ComparisonOperator, DomainOperator, Value};

/// Lexicographic comparison and PLUS as concatenation.
///
/// Concatenation accepts a non-string operand on either side and appends its
/// display form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringOperatorInterpreter;

impl ComparisonOperatorInterpreter for StringOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        match (left, right) {
            (Value::String(a), Value::String(b)) => Ok(Some(operator.test(a.as_str().cmp(b.as_str())))),
            (Value::String(_), _) => Err(EvalError::unsupported_comparison(operator, left, right)),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

impl DomainOperatorInterpreter for StringOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _target_type: &DomainType,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        if !matches!(left, Value::String(_)) && !matches!(right, Value::String(_)) {
            return Err(EvalError::illegal_operands(left, right));
        }
        match operator {
            DomainOperator::Plus => Ok(Value::String(format!("{}{}", left, right))),
            _ => Err(EvalError::unsupported_arithmetic(operator, left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation() {
        let ty = DomainType::basic("String");
        let result = DomainOperatorInterpreter::interpret(
            &StringOperatorInterpreter,
            &EvaluationContext::new(),
            &ty,
            &ty,
            &ty,
            &Value::string("order-"),
            &Value::Integer(42),
            DomainOperator::Plus,
        );
        assert_eq!(result, Ok(Value::string("order-42")));
    }

    #[test]
    fn test_lexicographic_order() {
        let ty = DomainType::basic("String");
        let lower = ComparisonOperatorInterpreter::interpret(
            &StringOperatorInterpreter,
            &EvaluationContext::new(),
            &ty,
            &ty,
            &Value::string("apple"),
            &Value::string("banana"),
            ComparisonOperator::Lower,
        );
        assert_eq!(lower, Ok(Some(true)));
    }
}
