//! Runtime values - the internal representation the engine manipulates
//!
//! This module defines the `Value` enum and its supporting types. `Value::Null`
//! is the absence of a value, which the engine treats as "unknown" in
//! three-valued logic. It is never an error.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TemporalInterval;

/// A runtime value produced or consumed during evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Absent value (unknown)
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// Arbitrary precision decimal
    Decimal(Decimal),
    /// String value
    String(String),
    /// Calendar date without a zone
    Date(NaiveDate),
    /// Precise point in time
    Instant(DateTime<Utc>),
    /// Signed composite duration
    Interval(TemporalInterval),
    /// Enum constant
    Enum(EnumValue),
    /// Entity instance with named attributes
    Entity(EntityValue),
    /// Ordered, finite sequence of values
    Collection(Vec<Value>),
}

/// The native kind of a non-null value.
///
/// Converters used by shape coercion are keyed by a `(from, to)` pair of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Boolean,
    Integer,
    Decimal,
    String,
    Date,
    Instant,
    Interval,
    Enum,
    Entity,
    Collection,
}

impl ValueKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Date => "Date",
            Self::Instant => "Instant",
            Self::Interval => "Interval",
            Self::Enum => "Enum",
            Self::Entity => "Entity",
            Self::Collection => "Collection",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Check if this value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is exactly `true`
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    /// Get the native kind, `None` for `Null`
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Integer(_) => Some(ValueKind::Integer),
            Self::Decimal(_) => Some(ValueKind::Decimal),
            Self::String(_) => Some(ValueKind::String),
            Self::Date(_) => Some(ValueKind::Date),
            Self::Instant(_) => Some(ValueKind::Instant),
            Self::Interval(_) => Some(ValueKind::Interval),
            Self::Enum(_) => Some(ValueKind::Enum),
            Self::Entity(_) => Some(ValueKind::Entity),
            Self::Collection(_) => Some(ValueKind::Collection),
        }
    }

    /// Name of the kind for diagnostics (`"Null"` for an absent value)
    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("Null", |k| k.name())
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Decimal, promoting integers
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            Self::Integer(i) => Some(Decimal::from(*i)),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a collection slice
    pub fn as_collection(&self) -> Option<&[Value]> {
        match self {
            Self::Collection(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as Entity
    pub fn as_entity(&self) -> Option<&EntityValue> {
        match self {
            Self::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a decimal value from its string form, `Null` if it does not parse
    pub fn decimal_str(value: &str) -> Self {
        value.parse::<Decimal>().map_or(Self::Null, Self::Decimal)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<TemporalInterval> for Value {
    fn from(value: TemporalInterval) -> Self {
        Self::Interval(value)
    }
}

/// Three-valued logic results map `None` (unknown) to `Null`.
impl From<Option<bool>> for Value {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Null, Self::Boolean)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::String(s) => write!(f, "{}", s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Instant(i) => write!(f, "{}", i.to_rfc3339()),
            Self::Interval(i) => write!(f, "{}", i),
            Self::Enum(e) => write!(f, "{}", e),
            Self::Entity(e) => write!(f, "{}", e),
            Self::Collection(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Enum constant, identified by its declaring type and key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValue {
    pub type_name: String,
    pub key: String,
}

impl EnumValue {
    pub fn new(type_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.key)
    }
}

/// Entity instance.
///
/// Attributes keep insertion order so that display and serialization are
/// stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    pub type_name: String,
    pub attributes: IndexMap<String, Value>,
}

impl EntityValue {
    /// Create an entity without attributes
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute assignment
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }
}

impl From<EntityValue> for Value {
    fn from(value: EntityValue) -> Self {
        Self::Entity(value)
    }
}

impl fmt::Display for EntityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (i, (name, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}
