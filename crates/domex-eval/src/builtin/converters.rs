//! Built-in shape converters used by `ExpressionEngine::evaluate_as`

use crate::builtin::temporal::utc_start_of_day;
use domex_model::{DomainModelBuilder, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{Value, ValueKind};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Scalar kinds converted to String through their display form
const DISPLAYABLE: [ValueKind; 7] = [
    ValueKind::Boolean,
    ValueKind::Integer,
    ValueKind::Decimal,
    ValueKind::Date,
    ValueKind::Instant,
    ValueKind::Interval,
    ValueKind::Enum,
];

fn mismatch(expected: ValueKind, value: &Value) -> EvalError {
    EvalError::type_mismatch(expected.name(), value.kind_name())
}

pub fn integer_to_decimal(_ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
    match value {
        Value::Integer(i) => Ok(Value::Decimal(Decimal::from(i))),
        other => Err(mismatch(ValueKind::Integer, &other)),
    }
}

/// Date to the instant at UTC start of day
pub fn date_to_instant(_ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
    match value {
        Value::Date(date) => Ok(Value::Instant(utc_start_of_day(date))),
        other => Err(mismatch(ValueKind::Date, &other)),
    }
}

/// Instant to its UTC calendar date
pub fn instant_to_date(_ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
    match value {
        Value::Instant(instant) => Ok(Value::Date(instant.date_naive())),
        other => Err(mismatch(ValueKind::Instant, &other)),
    }
}

pub fn to_display_string(_ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
    Ok(Value::String(value.to_string()))
}

/// Register every built-in converter
pub fn register_standard_converters(builder: &mut DomainModelBuilder) {
    builder.add_converter(ValueKind::Integer, ValueKind::Decimal, Arc::new(integer_to_decimal));
    builder.add_converter(ValueKind::Date, ValueKind::Instant, Arc::new(date_to_instant));
    builder.add_converter(ValueKind::Instant, ValueKind::Date, Arc::new(instant_to_date));
    for kind in DISPLAYABLE {
        builder.add_converter(kind, ValueKind::String, Arc::new(to_display_string));
    }
}
