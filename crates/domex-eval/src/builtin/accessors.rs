//! Built-in attribute accessors

use domex_model::{AttributeAccessor, EntityAttribute, EvalError, EvalResult, EvaluationContext};
use domex_types::Value;

/// Reads attributes of `Value::Entity` by attribute name.
///
/// An attribute the entity does not carry reads as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityAttributeAccessor;

impl AttributeAccessor for EntityAttributeAccessor {
    fn get_attribute(&self, _ctx: &EvaluationContext, value: &Value, attribute: &EntityAttribute) -> EvalResult<Value> {
        match value {
            Value::Entity(entity) => Ok(entity.get(attribute.name()).cloned().unwrap_or(Value::Null)),
            other => Err(EvalError::illegal_argument(format!(
                "cannot read {} from {} value",
                attribute,
                other.kind_name()
            ))),
        }
    }
}
