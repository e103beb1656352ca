//! Numeric interpreter for Integer and Decimal values
//!
//! Mixed Integer/Decimal operands are promoted to Decimal. Integer
//! arithmetic is checked; DIVIDE always yields a Decimal.

use domex_model::{ComparisonOperatorInterpreter, DomainOperatorInterpreter, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{ComparisonOperator, DomainOperator, Value};
use rust_decimal::Decimal;

/// Operand pair after promotion
enum Operands {
    Integer(i64, i64),
    Decimal(Decimal, Decimal),
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Integer(i) => Some(Decimal::from(*i)),
        Value::Decimal(d) => Some(*d),
        _ => None,
    }
}

fn promote(left: &Value, right: &Value) -> Option<Operands> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(Operands::Integer(*a, *b)),
        _ => Some(Operands::Decimal(as_decimal(left)?, as_decimal(right)?)),
    }
}

fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Integer(_) | Value::Decimal(_))
}

/// Integer and Decimal comparison and arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericOperatorInterpreter;

impl NumericOperatorInterpreter {
    fn negate(value: &Value) -> EvalResult<Value> {
        match value {
            Value::Integer(i) => i
                .checked_neg()
                .map(Value::Integer)
                .ok_or_else(|| EvalError::overflow(format!("-{}", i))),
            Value::Decimal(d) => Ok(Value::Decimal(-*d)),
            other => Err(EvalError::illegal_operands(other, other)),
        }
    }

    fn integer(a: i64, b: i64, left: &Value, right: &Value, operator: DomainOperator) -> EvalResult<Value> {
        let overflow = || EvalError::overflow(format!("{} {} {}", a, operator.symbol(), b));
        match operator {
            DomainOperator::Plus => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
            DomainOperator::Minus => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
            DomainOperator::Multiply => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
            DomainOperator::Divide => Self::decimal(Decimal::from(a), Decimal::from(b), left, right, operator),
            DomainOperator::Modulo if b == 0 => Err(EvalError::DivisionByZero),
            DomainOperator::Modulo => a.checked_rem(b).map(Value::Integer).ok_or_else(overflow),
            _ => Err(EvalError::unsupported_arithmetic(operator, left, right)),
        }
    }

    fn decimal(a: Decimal, b: Decimal, left: &Value, right: &Value, operator: DomainOperator) -> EvalResult<Value> {
        let overflow = || EvalError::overflow(format!("{} {} {}", a, operator.symbol(), b));
        let result = match operator {
            DomainOperator::Plus => a.checked_add(b),
            DomainOperator::Minus => a.checked_sub(b),
            DomainOperator::Multiply => a.checked_mul(b),
            DomainOperator::Divide | DomainOperator::Modulo if b.is_zero() => {
                return Err(EvalError::DivisionByZero);
            }
            DomainOperator::Divide => a.checked_div(b).map(|d| d.normalize()),
            DomainOperator::Modulo => a.checked_rem(b),
            _ => return Err(EvalError::unsupported_arithmetic(operator, left, right)),
        };
        result.map(Value::Decimal).ok_or_else(overflow)
    }
}

impl ComparisonOperatorInterpreter for NumericOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        if !is_numeric(left) {
            return Err(EvalError::illegal_operands(left, right));
        }
        let ordering = match promote(left, right) {
            Some(Operands::Integer(a, b)) => a.cmp(&b),
            Some(Operands::Decimal(a, b)) => a.cmp(&b),
            None => return Err(EvalError::unsupported_comparison(operator, left, right)),
        };
        Ok(Some(operator.test(ordering)))
    }
}

impl DomainOperatorInterpreter for NumericOperatorInterpreter {
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
        match operator {
            DomainOperator::UnaryMinus => Self::negate(left),
            DomainOperator::UnaryPlus if is_numeric(left) => Ok(left.clone()),
            _ => match promote(left, right) {
                Some(Operands::Integer(a, b)) => Self::integer(a, b, left, right, operator),
                Some(Operands::Decimal(a, b)) => Self::decimal(a, b, left, right, operator),
                None => Err(EvalError::illegal_operands(left, right)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic(l: Value, r: Value, op: DomainOperator) -> EvalResult<Value> {
        let ty = DomainType::basic("Decimal");
        DomainOperatorInterpreter::interpret(&NumericOperatorInterpreter, &EvaluationContext::new(), &ty, &ty, &ty, &l, &r, op)
    }

    fn compare(l: Value, r: Value, op: ComparisonOperator) -> EvalResult<Option<bool>> {
        let ty = DomainType::basic("Decimal");
        ComparisonOperatorInterpreter::interpret(&NumericOperatorInterpreter, &EvaluationContext::new(), &ty, &ty, &l, &r, op)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(arithmetic(Value::Integer(2), Value::Integer(3), DomainOperator::Plus), Ok(Value::Integer(5)));
        assert_eq!(arithmetic(Value::Integer(7), Value::Integer(3), DomainOperator::Modulo), Ok(Value::Integer(1)));
        assert_eq!(arithmetic(Value::Integer(7), Value::Integer(7), DomainOperator::UnaryMinus), Ok(Value::Integer(-7)));
    }

    #[test]
    fn test_integer_division_yields_decimal() {
        assert_eq!(
            arithmetic(Value::Integer(10), Value::Integer(4), DomainOperator::Divide),
            Ok(Value::decimal_str("2.5"))
        );
    }

    #[test]
    fn test_mixed_operands_promote() {
        assert_eq!(
            arithmetic(Value::Integer(1), Value::decimal_str("0.5"), DomainOperator::Plus),
            Ok(Value::decimal_str("1.5"))
        );
        assert_eq!(compare(Value::Integer(2), Value::decimal_str("1.5"), ComparisonOperator::Greater), Ok(Some(true)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            arithmetic(Value::Integer(1), Value::Integer(0), DomainOperator::Divide),
            Err(EvalError::DivisionByZero)
        );
        assert!(matches!(
            arithmetic(Value::Integer(i64::MAX), Value::Integer(1), DomainOperator::Plus),
            Err(EvalError::Overflow { .. })
        ));
        assert!(matches!(
            compare(Value::string("a"), Value::Integer(1), ComparisonOperator::Equal),
            Err(EvalError::IllegalArgument { .. })
        ));
        assert!(matches!(
            compare(Value::Integer(1), Value::string("a"), ComparisonOperator::Equal),
            Err(EvalError::UnsupportedOperator { .. })
        ));
    }
}
