//! Runtime value space for domex expressions
//!
//! This crate defines what the evaluation engine manipulates:
//! - `Value`: the tagged value space, with `Value::Null` as the absent value
//! - `TemporalInterval`: signed composite durations
//! - `DomainOperator` / `ComparisonOperator`: the closed operator sets that
//!   per-type interpreters implement

pub mod interval;
pub mod operator;
pub mod value;

pub use interval::TemporalInterval;
pub use operator::{ComparisonOperator, DomainOperator};
pub use value::{EntityValue, EnumValue, Value, ValueKind};
