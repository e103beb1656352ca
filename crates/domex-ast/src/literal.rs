//! Literal nodes

use crate::Expression;
use domex_model::DomainTypeRef;
use domex_types::{EntityValue, EnumValue, Value};

/// Payload of a literal
#[derive(Debug, Clone)]
pub enum LiteralValue {
    /// Fixed value in its internal representation
    Scalar(Value),
    /// Collection literal; elements are evaluated in order
    Collection(Vec<Expression>),
}

/// A literal of a declared domain type
#[derive(Debug, Clone)]
pub struct Literal {
    pub domain_type: DomainTypeRef,
    pub value: LiteralValue,
}

impl Literal {
    /// Scalar literal
    pub fn scalar(domain_type: DomainTypeRef, value: impl Into<Value>) -> Self {
        Self {
            domain_type,
            value: LiteralValue::Scalar(value.into()),
        }
    }

    /// Typed null
    pub fn null(domain_type: DomainTypeRef) -> Self {
        Self::scalar(domain_type, Value::Null)
    }

    /// Enum constant of the given type
    pub fn enumeration(domain_type: DomainTypeRef, key: impl Into<String>) -> Self {
        let value = EnumValue::new(domain_type.name(), key);
        Self::scalar(domain_type, Value::Enum(value))
    }

    /// Entity literal
    pub fn entity(domain_type: DomainTypeRef, value: EntityValue) -> Self {
        Self::scalar(domain_type, Value::Entity(value))
    }

    /// Collection literal over element expressions
    pub fn collection(domain_type: DomainTypeRef, elements: Vec<Expression>) -> Self {
        Self {
            domain_type,
            value: LiteralValue::Collection(elements),
        }
    }
}
