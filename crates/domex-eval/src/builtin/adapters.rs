//! Built-in type adapters

use chrono::DateTime;
use domex_model::{DomainType, EvalError, EvalResult, EvaluationContext, TypeAdapter};
use domex_types::Value;

/// Adapter for types whose model and internal representations coincide
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTypeAdapter;

impl TypeAdapter for IdentityTypeAdapter {
    fn to_internal_type(&self, _ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
        Ok(value)
    }

    fn to_model_type(&self, _ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
        Ok(value)
    }
}

/// Instants stored by the model as milliseconds since the Unix epoch.
///
/// Internally the engine works with `Value::Instant`; the model sees
/// `Value::Integer`. Null passes through both ways.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochMillisTypeAdapter;

impl TypeAdapter for EpochMillisTypeAdapter {
    fn to_internal_type(&self, _ctx: &EvaluationContext, value: Value, domain_type: &DomainType) -> EvalResult<Value> {
        match value {
            Value::Integer(millis) => DateTime::from_timestamp_millis(millis)
                .map(Value::Instant)
                .ok_or_else(|| EvalError::illegal_argument(format!("{} ms is out of range for {}", millis, domain_type))),
            Value::Null | Value::Instant(_) => Ok(value),
            other => Err(EvalError::type_mismatch("Integer", other.kind_name())),
        }
    }

    fn to_model_type(&self, _ctx: &EvaluationContext, value: Value, _domain_type: &DomainType) -> EvalResult<Value> {
        match value {
            Value::Instant(instant) => Ok(Value::Integer(instant.timestamp_millis())),
            Value::Null | Value::Integer(_) => Ok(value),
            other => Err(EvalError::type_mismatch("Instant", other.kind_name())),
        }
    }
}
