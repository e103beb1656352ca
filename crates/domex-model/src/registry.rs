//! Domain model registry
//!
//! The `DomainModel` holds every type, attribute, function and shape converter
//! the engine may be asked about. It is assembled with a `DomainModelBuilder`
//! and is read-only afterwards, so one model can back any number of engines.

use crate::domain::{DomainFunction, DomainTypeRef, EntityAttribute};
use crate::spi::TypeConverter;
use domex_types::ValueKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry for shape converters, keyed by `(from, to)` value kinds
#[derive(Default, Clone)]
pub struct ConverterRegistry {
    converters: HashMap<(ValueKind, ValueKind), Arc<dyn TypeConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter, replacing any previous one for the same pair
    pub fn register(&mut self, from: ValueKind, to: ValueKind, converter: Arc<dyn TypeConverter>) {
        if self.converters.insert((from, to), converter).is_some() {
            log::debug!("replaced converter {} -> {}", from, to);
        }
    }

    /// Get the converter for a pair of kinds
    pub fn get(&self, from: ValueKind, to: ValueKind) -> Option<&Arc<dyn TypeConverter>> {
        self.converters.get(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

/// Read-only domain model
#[derive(Clone, Default)]
pub struct DomainModel {
    types: IndexMap<String, DomainTypeRef>,
    attributes: IndexMap<(String, String), Arc<EntityAttribute>>,
    functions: IndexMap<String, Arc<DomainFunction>>,
    converters: ConverterRegistry,
}

impl DomainModel {
    /// Start building a model
    pub fn builder() -> DomainModelBuilder {
        DomainModelBuilder::default()
    }

    /// Get a type by name
    pub fn domain_type(&self, name: &str) -> Option<&DomainTypeRef> {
        self.types.get(name)
    }

    /// Iterate over types in registration order
    pub fn types(&self) -> impl Iterator<Item = &DomainTypeRef> {
        self.types.values()
    }

    /// Get an attribute of an entity type
    pub fn attribute(&self, owner: &str, name: &str) -> Option<&Arc<EntityAttribute>> {
        self.attributes.get(&(owner.to_string(), name.to_string()))
    }

    /// Iterate over the attributes declared by one entity type
    pub fn attributes_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a Arc<EntityAttribute>> + 'a {
        self.attributes
            .iter()
            .filter(move |((o, _), _)| o == owner)
            .map(|(_, a)| a)
    }

    /// Get a function by name (case-insensitive)
    pub fn function(&self, name: &str) -> Option<&Arc<DomainFunction>> {
        self.functions.get(&name.to_ascii_uppercase())
    }

    /// Get the converter between two value kinds
    pub fn converter(&self, from: ValueKind, to: ValueKind) -> Option<&Arc<dyn TypeConverter>> {
        self.converters.get(from, to)
    }
}

impl fmt::Debug for DomainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainModel")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .field("attributes", &self.attributes.len())
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .field("converters", &self.converters.len())
            .finish()
    }
}

/// Builder for [`DomainModel`]
#[derive(Default, Clone)]
pub struct DomainModelBuilder {
    model: DomainModel,
}

impl DomainModelBuilder {
    /// Register a type under its name
    pub fn with_type(mut self, domain_type: DomainTypeRef) -> Self {
        self.add_type(domain_type);
        self
    }

    /// Register a type under its name, replacing a previous type of that name
    pub fn add_type(&mut self, domain_type: DomainTypeRef) {
        let name = domain_type.name().to_string();
        if self.model.types.insert(name.clone(), domain_type).is_some() {
            log::debug!("replaced domain type {}", name);
        }
    }

    /// Register an entity attribute under its owner and name
    pub fn with_attribute(mut self, attribute: Arc<EntityAttribute>) -> Self {
        self.add_attribute(attribute);
        self
    }

    pub fn add_attribute(&mut self, attribute: Arc<EntityAttribute>) {
        let key = (attribute.owner().to_string(), attribute.name().to_string());
        self.model.attributes.insert(key, attribute);
    }

    /// Register a function; names are case-insensitive
    pub fn with_function(mut self, function: Arc<DomainFunction>) -> Self {
        self.add_function(function);
        self
    }

    pub fn add_function(&mut self, function: Arc<DomainFunction>) {
        let name = function.name().to_ascii_uppercase();
        if self.model.functions.insert(name.clone(), function).is_some() {
            log::debug!("replaced domain function {}", name);
        }
    }

    /// Register a shape converter
    pub fn with_converter(mut self, from: ValueKind, to: ValueKind, converter: Arc<dyn TypeConverter>) -> Self {
        self.add_converter(from, to, converter);
        self
    }

    pub fn add_converter(&mut self, from: ValueKind, to: ValueKind, converter: Arc<dyn TypeConverter>) {
        self.model.converters.register(from, to, converter);
    }

    /// Look up a type registered so far
    pub fn domain_type(&self, name: &str) -> Option<&DomainTypeRef> {
        self.model.domain_type(name)
    }

    pub fn build(self) -> DomainModel {
        self.model
    }
}
