//! Built-in domain functions
//!
//! Every function yields an absent result when one of its arguments is
//! absent.

use domex_model::{DomainFunction, DomainFunctionArguments, DomainTypeRef, EvalError, EvalResult, EvaluationContext};
use domex_types::Value;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use std::sync::Arc;

fn string_argument<'a>(function: &DomainFunction, arguments: &'a DomainFunctionArguments, position: usize) -> EvalResult<Option<&'a str>> {
    match arguments.value(position)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(EvalError::illegal_argument(format!(
            "{} expects a String argument, got {}",
            function,
            other.kind_name()
        ))),
    }
}

fn numeric_argument(function: &DomainFunction, arguments: &DomainFunctionArguments, position: usize) -> EvalResult<Option<f64>> {
    let decimal = match arguments.value(position)? {
        Value::Null => return Ok(None),
        Value::Integer(i) => Decimal::from(*i),
        Value::Decimal(d) => *d,
        other => {
            return Err(EvalError::illegal_argument(format!(
                "{} expects a numeric argument, got {}",
                function,
                other.kind_name()
            )));
        }
    };
    decimal
        .to_f64()
        .map(Some)
        .ok_or_else(|| EvalError::illegal_argument(format!("{} is not representable as f64", decimal)))
}

/// `LOWER(string)`
pub fn lower(_ctx: &EvaluationContext, function: &DomainFunction, arguments: &DomainFunctionArguments) -> EvalResult<Value> {
    Ok(string_argument(function, arguments, 0)?.map_or(Value::Null, |s| Value::String(s.to_lowercase())))
}

/// `UPPER(string)`
pub fn upper(_ctx: &EvaluationContext, function: &DomainFunction, arguments: &DomainFunctionArguments) -> EvalResult<Value> {
    Ok(string_argument(function, arguments, 0)?.map_or(Value::Null, |s| Value::String(s.to_uppercase())))
}

/// `POW(base, power)` as a Decimal
pub fn pow(_ctx: &EvaluationContext, function: &DomainFunction, arguments: &DomainFunctionArguments) -> EvalResult<Value> {
    let (Some(base), Some(power)) = (
        numeric_argument(function, arguments, 0)?,
        numeric_argument(function, arguments, 1)?,
    ) else {
        return Ok(Value::Null);
    };
    let result = base.powf(power);
    if result.is_nan() {
        return Err(EvalError::illegal_argument(format!("POW({}, {}) has no real result", base, power)));
    }
    Decimal::from_f64(result)
        .map(|d| Value::Decimal(d.normalize()))
        .ok_or_else(|| EvalError::overflow(format!("POW({}, {})", base, power)))
}

/// `SIZE(collection)`
pub fn size(_ctx: &EvaluationContext, function: &DomainFunction, arguments: &DomainFunctionArguments) -> EvalResult<Value> {
    match arguments.value(0)? {
        Value::Null => Ok(Value::Null),
        Value::Collection(items) => Ok(Value::Integer(i64::try_from(items.len()).unwrap_or(i64::MAX))),
        other => Err(EvalError::illegal_argument(format!(
            "{} expects a Collection argument, got {}",
            function,
            other.kind_name()
        ))),
    }
}

/// Declarations of the built-in functions over the given standard types
pub fn standard_functions(
    string: &DomainTypeRef,
    integer: &DomainTypeRef,
    decimal: &DomainTypeRef,
    collection: &DomainTypeRef,
) -> Vec<Arc<DomainFunction>> {
    vec![
        DomainFunction::new("LOWER", string.clone())
            .with_argument("string", string.clone())
            .with_invoker(Arc::new(lower))
            .into_ref(),
        DomainFunction::new("UPPER", string.clone())
            .with_argument("string", string.clone())
            .with_invoker(Arc::new(upper))
            .into_ref(),
        DomainFunction::new("POW", decimal.clone())
            .with_argument("base", decimal.clone())
            .with_argument("power", decimal.clone())
            .with_invoker(Arc::new(pow))
            .into_ref(),
        DomainFunction::new("SIZE", integer.clone())
            .with_argument("collection", collection.clone())
            .with_invoker(Arc::new(size))
            .into_ref(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use domex_model::DomainType;

    fn call(
        f: fn(&EvaluationContext, &DomainFunction, &DomainFunctionArguments) -> EvalResult<Value>,
        values: Vec<Value>,
    ) -> EvalResult<Value> {
        let decimal = DomainType::basic("Decimal").into_ref();
        let function = DomainFunction::new("F", decimal.clone())
            .with_argument("a", decimal.clone())
            .with_argument("b", decimal.clone());
        let mut arguments = DomainFunctionArguments::with_arity(2);
        for (position, value) in values.into_iter().enumerate() {
            arguments.assign(position, value, decimal.clone())?;
        }
        f(&EvaluationContext::new(), &function, &arguments)
    }

    #[test]
    fn test_case_functions() {
        assert_eq!(call(lower, vec![Value::string("MiXeD")]), Ok(Value::string("mixed")));
        assert_eq!(call(upper, vec![Value::string("MiXeD")]), Ok(Value::string("MIXED")));
        assert_eq!(call(upper, vec![]), Ok(Value::Null));
    }

    #[test]
    fn test_pow() {
        assert_eq!(
            call(pow, vec![Value::Integer(2), Value::Integer(10)]),
            Ok(Value::decimal_str("1024"))
        );
        assert_eq!(call(pow, vec![Value::Integer(2)]), Ok(Value::Null));
    }

    #[test]
    fn test_pow_without_real_result() {
        assert!(matches!(
            call(pow, vec![Value::Integer(-8), Value::decimal_str("0.5")]),
            Err(EvalError::IllegalArgument { .. })
        ));
        assert!(matches!(
            call(pow, vec![Value::Integer(10), Value::Integer(400)]),
            Err(EvalError::Overflow { .. })
        ));
    }

    #[test]
    fn test_size() {
        let items = Value::Collection(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(call(size, vec![items]), Ok(Value::Integer(2)));
        assert!(call(size, vec![Value::Integer(2)]).is_err());
    }
}
