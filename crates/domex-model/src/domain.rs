//! Domain descriptors: types, entity attributes and functions
//!
//! Descriptors are built once, wrapped in `Arc`, and never mutated afterwards.
//! Expression nodes reference them; the domain model owns them.
//!
//! Instead of an open metadata map, every descriptor exposes a closed set of
//! optional capability slots. A missing slot is reported by the engine when it
//! actually needs the capability, not when the descriptor is built.

use crate::spi::{
    AttributeAccessor, ComparisonOperatorInterpreter, DomainOperatorInterpreter, FunctionInvoker,
    TypeAdapter,
};
use std::fmt;
use std::sync::Arc;

/// Shared reference to a domain type
pub type DomainTypeRef = Arc<DomainType>;

/// Kind of a domain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainTypeKind {
    Basic,
    Collection,
    Entity,
    Enum,
}

/// Capabilities a domain type can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ComparisonInterpreter,
    ArithmeticInterpreter,
    TypeAdapter,
}

impl Capability {
    /// Human readable name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ComparisonInterpreter => "comparison operator interpreter",
            Self::ArithmeticInterpreter => "domain operator interpreter",
            Self::TypeAdapter => "type adapter",
        }
    }
}

/// Logical type of a value in the expression language
#[derive(Clone)]
pub struct DomainType {
    name: String,
    kind: DomainTypeKind,
    element_type: Option<DomainTypeRef>,
    enum_keys: Vec<String>,
    comparison: Option<Arc<dyn ComparisonOperatorInterpreter>>,
    arithmetic: Option<Arc<dyn DomainOperatorInterpreter>>,
    adapter: Option<Arc<dyn TypeAdapter>>,
}

impl DomainType {
    fn new(name: impl Into<String>, kind: DomainTypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            element_type: None,
            enum_keys: Vec::new(),
            comparison: None,
            arithmetic: None,
            adapter: None,
        }
    }

    /// Create a basic (scalar) type
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(name, DomainTypeKind::Basic)
    }

    /// Create an entity type
    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, DomainTypeKind::Entity)
    }

    /// Create an enum type with its constant keys
    pub fn enumeration(name: impl Into<String>, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut ty = Self::new(name, DomainTypeKind::Enum);
        ty.enum_keys = keys.into_iter().map(Into::into).collect();
        ty
    }

    /// Create a collection type over an element type
    pub fn collection(name: impl Into<String>, element_type: DomainTypeRef) -> Self {
        let mut ty = Self::new(name, DomainTypeKind::Collection);
        ty.element_type = Some(element_type);
        ty
    }

    /// Set the comparison operator interpreter
    pub fn with_comparison_interpreter(mut self, interpreter: Arc<dyn ComparisonOperatorInterpreter>) -> Self {
        self.comparison = Some(interpreter);
        self
    }

    /// Set the arithmetic (domain operator) interpreter
    pub fn with_arithmetic_interpreter(mut self, interpreter: Arc<dyn DomainOperatorInterpreter>) -> Self {
        self.arithmetic = Some(interpreter);
        self
    }

    /// Set the type adapter
    pub fn with_adapter(mut self, adapter: Arc<dyn TypeAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Freeze the type into a shared reference
    pub fn into_ref(self) -> DomainTypeRef {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DomainTypeKind {
        self.kind
    }

    pub fn is_collection(&self) -> bool {
        self.kind == DomainTypeKind::Collection
    }

    /// Element type of a collection type
    pub fn element_type(&self) -> Option<&DomainTypeRef> {
        self.element_type.as_ref()
    }

    /// Declared constants of an enum type
    pub fn enum_keys(&self) -> &[String] {
        &self.enum_keys
    }

    pub fn comparison_interpreter(&self) -> Option<&Arc<dyn ComparisonOperatorInterpreter>> {
        self.comparison.as_ref()
    }

    pub fn arithmetic_interpreter(&self) -> Option<&Arc<dyn DomainOperatorInterpreter>> {
        self.arithmetic.as_ref()
    }

    pub fn adapter(&self) -> Option<&Arc<dyn TypeAdapter>> {
        self.adapter.as_ref()
    }

    /// Pure lookup of whether a capability slot is filled
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ComparisonInterpreter => self.comparison.is_some(),
            Capability::ArithmeticInterpreter => self.arithmetic.is_some(),
            Capability::TypeAdapter => self.adapter.is_some(),
        }
    }
}

/// Types are identified by name and kind; capability slots do not take part.
impl PartialEq for DomainType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for DomainType {}

impl fmt::Debug for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainType")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("element_type", &self.element_type.as_ref().map(|t| t.name()))
            .field("comparison", &self.comparison.is_some())
            .field("arithmetic", &self.arithmetic.is_some())
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Attribute of an entity type
#[derive(Clone)]
pub struct EntityAttribute {
    owner: String,
    name: String,
    domain_type: DomainTypeRef,
    accessor: Option<Arc<dyn AttributeAccessor>>,
    adapter: Option<Arc<dyn TypeAdapter>>,
}

impl EntityAttribute {
    /// Create an attribute of `owner` with the given value type
    pub fn new(owner: impl Into<String>, name: impl Into<String>, domain_type: DomainTypeRef) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            domain_type,
            accessor: None,
            adapter: None,
        }
    }

    pub fn with_accessor(mut self, accessor: Arc<dyn AttributeAccessor>) -> Self {
        self.accessor = Some(accessor);
        self
    }

    pub fn with_adapter(mut self, adapter: Arc<dyn TypeAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn into_ref(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Name of the declaring entity type
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_type(&self) -> &DomainTypeRef {
        &self.domain_type
    }

    pub fn accessor(&self) -> Option<&Arc<dyn AttributeAccessor>> {
        self.accessor.as_ref()
    }

    pub fn adapter(&self) -> Option<&Arc<dyn TypeAdapter>> {
        self.adapter.as_ref()
    }
}

impl fmt::Debug for EntityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityAttribute")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("domain_type", &self.domain_type.name())
            .field("accessor", &self.accessor.is_some())
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

impl fmt::Display for EntityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// Declared argument of a domain function
#[derive(Clone)]
pub struct DomainFunctionArgument {
    name: String,
    position: usize,
    domain_type: DomainTypeRef,
    adapter: Option<Arc<dyn TypeAdapter>>,
}

impl DomainFunctionArgument {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position in the function's argument list
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn domain_type(&self) -> &DomainTypeRef {
        &self.domain_type
    }

    pub fn adapter(&self) -> Option<&Arc<dyn TypeAdapter>> {
        self.adapter.as_ref()
    }
}

impl fmt::Debug for DomainFunctionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainFunctionArgument")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("domain_type", &self.domain_type.name())
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

/// Domain function declaration
#[derive(Clone)]
pub struct DomainFunction {
    name: String,
    arguments: Vec<Arc<DomainFunctionArgument>>,
    result_type: DomainTypeRef,
    invoker: Option<Arc<dyn FunctionInvoker>>,
    result_adapter: Option<Arc<dyn TypeAdapter>>,
}

impl DomainFunction {
    /// Create a function without arguments
    pub fn new(name: impl Into<String>, result_type: DomainTypeRef) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            result_type,
            invoker: None,
            result_adapter: None,
        }
    }

    /// Append an argument; its position is the current arity
    pub fn with_argument(self, name: impl Into<String>, domain_type: DomainTypeRef) -> Self {
        self.push_argument(name.into(), domain_type, None)
    }

    /// Append an argument whose value is converted to the model type before invocation
    pub fn with_adapted_argument(
        self,
        name: impl Into<String>,
        domain_type: DomainTypeRef,
        adapter: Arc<dyn TypeAdapter>,
    ) -> Self {
        self.push_argument(name.into(), domain_type, Some(adapter))
    }

    fn push_argument(mut self, name: String, domain_type: DomainTypeRef, adapter: Option<Arc<dyn TypeAdapter>>) -> Self {
        let position = self.arguments.len();
        self.arguments.push(Arc::new(DomainFunctionArgument {
            name,
            position,
            domain_type,
            adapter,
        }));
        self
    }

    pub fn with_invoker(mut self, invoker: Arc<dyn FunctionInvoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Adapter converting the invoker's result to the internal representation
    pub fn with_result_adapter(mut self, adapter: Arc<dyn TypeAdapter>) -> Self {
        self.result_adapter = Some(adapter);
        self
    }

    pub fn into_ref(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared arity
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn arguments(&self) -> &[Arc<DomainFunctionArgument>] {
        &self.arguments
    }

    pub fn argument(&self, position: usize) -> Option<&Arc<DomainFunctionArgument>> {
        self.arguments.get(position)
    }

    pub fn argument_by_name(&self, name: &str) -> Option<&Arc<DomainFunctionArgument>> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn result_type(&self) -> &DomainTypeRef {
        &self.result_type
    }

    pub fn invoker(&self) -> Option<&Arc<dyn FunctionInvoker>> {
        self.invoker.as_ref()
    }

    pub fn result_adapter(&self) -> Option<&Arc<dyn TypeAdapter>> {
        self.result_adapter.as_ref()
    }
}

impl fmt::Debug for DomainFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainFunction")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("result_type", &self.result_type.name())
            .field("invoker", &self.invoker.is_some())
            .field("result_adapter", &self.result_adapter.is_some())
            .finish()
    }
}

impl fmt::Display for DomainFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
