//! Domain model abstraction for domex
//!
//! This crate provides what the evaluation engine consumes from its
//! collaborators:
//! - Domain descriptors (`DomainType`, `EntityAttribute`, `DomainFunction`)
//!   with closed capability slots
//! - Capability contracts (`spi`): comparison and arithmetic interpreters,
//!   type adapters, attribute accessors, function invokers, converters
//! - `DomainModel`: the read-only registry built once per domain
//! - `EvaluationContext`: root alias bindings for one evaluation
//! - `EvalError`: the failure taxonomy shared by the engine and plug-ins

pub mod arguments;
pub mod context;
pub mod domain;
pub mod error;
pub mod registry;
pub mod spi;

pub use arguments::DomainFunctionArguments;
pub use context::EvaluationContext;
pub use domain::{
    Capability, DomainFunction, DomainFunctionArgument, DomainType, DomainTypeKind, DomainTypeRef,
    EntityAttribute,
};
pub use error::{EvalError, EvalResult};
pub use registry::{ConverterRegistry, DomainModel, DomainModelBuilder};
pub use spi::{
    AttributeAccessor, ComparisonOperatorInterpreter, DomainOperatorInterpreter, FunctionInvoker,
    TypeAdapter, TypeConverter,
};
