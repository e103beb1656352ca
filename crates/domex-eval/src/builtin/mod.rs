//! Built-in interpreters, adapters, accessors, functions and converters
//!
//! `standard_model()` wires them into a model builder the way most hosts
//! want them. Hosts with other needs register their own implementations on
//! their own types instead; the engine does not know about any of these.

pub mod accessors;
pub mod adapters;
pub mod converters;
pub mod equality;
pub mod functions;
pub mod numeric;
pub mod string;
pub mod temporal;

pub use accessors::EntityAttributeAccessor;
pub use adapters::{EpochMillisTypeAdapter, IdentityTypeAdapter};
pub use equality::EqualityOperatorInterpreter;
pub use numeric::NumericOperatorInterpreter;
pub use string::StringOperatorInterpreter;
pub use temporal::{
    DateOperatorInterpreter, IntervalOperatorInterpreter, LocalDateOperatorInterpreter,
    TimestampOperatorInterpreter,
};

use domex_model::{DomainModelBuilder, DomainType};
use std::sync::Arc;

pub const BOOLEAN: &str = "Boolean";
pub const INTEGER: &str = "Integer";
pub const DECIMAL: &str = "Decimal";
pub const STRING: &str = "String";
/// Calendar date compared against instants at UTC start of day
pub const DATE: &str = "Date";
/// Calendar date compared against instants at local start of day
pub const LOCAL_DATE: &str = "LocalDate";
pub const TIMESTAMP: &str = "Timestamp";
pub const INTERVAL: &str = "Interval";

/// Name of the collection type over a standard element type
pub fn collection_type_name(element: &str) -> String {
    format!("Collection<{}>", element)
}

fn scalar_types() -> Vec<DomainType> {
    let numeric = Arc::new(NumericOperatorInterpreter);
    vec![
        DomainType::basic(BOOLEAN)
            .with_comparison_interpreter(Arc::new(EqualityOperatorInterpreter))
            .with_adapter(Arc::new(IdentityTypeAdapter)),
        DomainType::basic(INTEGER)
            .with_comparison_interpreter(numeric.clone())
            .with_arithmetic_interpreter(numeric.clone()),
        DomainType::basic(DECIMAL)
            .with_comparison_interpreter(numeric.clone())
            .with_arithmetic_interpreter(numeric),
        DomainType::basic(STRING)
            .with_comparison_interpreter(Arc::new(StringOperatorInterpreter))
            .with_arithmetic_interpreter(Arc::new(StringOperatorInterpreter)),
        DomainType::basic(DATE)
            .with_comparison_interpreter(Arc::new(DateOperatorInterpreter))
            .with_arithmetic_interpreter(Arc::new(DateOperatorInterpreter)),
        DomainType::basic(LOCAL_DATE)
            .with_comparison_interpreter(Arc::new(LocalDateOperatorInterpreter))
            .with_arithmetic_interpreter(Arc::new(LocalDateOperatorInterpreter)),
        DomainType::basic(TIMESTAMP)
            .with_comparison_interpreter(Arc::new(TimestampOperatorInterpreter))
            .with_arithmetic_interpreter(Arc::new(TimestampOperatorInterpreter)),
        DomainType::basic(INTERVAL)
            .with_comparison_interpreter(Arc::new(IntervalOperatorInterpreter))
            .with_arithmetic_interpreter(Arc::new(IntervalOperatorInterpreter)),
    ]
}

/// Builder pre-populated with the standard types, a collection type per
/// standard type, the built-in functions and converters.
///
/// Entity and enum types are left to the host:
///
/// ```ignore
/// let mut builder = standard_model();
/// builder.add_type(DomainType::entity("User").into_ref());
/// let model = Arc::new(builder.build());
/// ```
pub fn standard_model() -> DomainModelBuilder {
    let mut builder = DomainModelBuilder::default();
    for ty in scalar_types() {
        let ty = ty.into_ref();
        builder.add_type(DomainType::collection(collection_type_name(ty.name()), ty.clone()).into_ref());
        builder.add_type(ty);
    }

    let lookup = |name: &str| builder.domain_type(name).cloned();
    if let (Some(string), Some(integer), Some(decimal), Some(collection)) = (
        lookup(STRING),
        lookup(INTEGER),
        lookup(DECIMAL),
        lookup(&collection_type_name(INTEGER)),
    ) {
        for function in functions::standard_functions(&string, &integer, &decimal, &collection) {
            builder.add_function(function);
        }
    }

    converters::register_standard_converters(&mut builder);
    log::debug!("standard domain model prepared");
    builder
}
