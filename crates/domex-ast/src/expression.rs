//! Expression nodes
//!
//! Every node carries the domain type resolved for it when the tree was
//! compiled. The engine reads that type and never recomputes it.

use crate::{BoxExpr, Literal, Predicate};
use domex_model::{DomainFunction, DomainFunctionArgument, DomainTypeRef, EntityAttribute};
use domex_types::DomainOperator;
use std::sync::Arc;

/// All expression kinds
#[derive(Debug, Clone)]
pub enum Expression {
    /// Scalar, enum, entity or collection literal
    Literal(Literal),
    /// Attribute path from a root alias or a base expression
    Path(Path),
    /// Signed wrapper around an arithmetic operand
    ArithmeticFactor(ArithmeticFactor),
    /// Binary arithmetic
    ChainingArithmetic(ChainingArithmeticExpression),
    /// Domain function call
    FunctionInvocation(FunctionInvocation),
    /// Boolean-valued predicate
    Predicate(Predicate),
}

impl Expression {
    /// Declared domain type of this node
    pub fn domain_type(&self) -> &DomainTypeRef {
        match self {
            Self::Literal(e) => &e.domain_type,
            Self::Path(e) => &e.domain_type,
            Self::ArithmeticFactor(e) => &e.domain_type,
            Self::ChainingArithmetic(e) => &e.domain_type,
            Self::FunctionInvocation(e) => &e.domain_type,
            Self::Predicate(p) => p.domain_type(),
        }
    }

    /// Box this expression for use as a child node
    pub fn boxed(self) -> BoxExpr {
        Box::new(self)
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Path> for Expression {
    fn from(value: Path) -> Self {
        Self::Path(value)
    }
}

impl From<ArithmeticFactor> for Expression {
    fn from(value: ArithmeticFactor) -> Self {
        Self::ArithmeticFactor(value)
    }
}

impl From<ChainingArithmeticExpression> for Expression {
    fn from(value: ChainingArithmeticExpression) -> Self {
        Self::ChainingArithmetic(value)
    }
}

impl From<FunctionInvocation> for Expression {
    fn from(value: FunctionInvocation) -> Self {
        Self::FunctionInvocation(value)
    }
}

impl From<Predicate> for Expression {
    fn from(value: Predicate) -> Self {
        Self::Predicate(value)
    }
}

/// Where a path starts
#[derive(Debug, Clone)]
pub enum PathBase {
    /// Root alias bound in the evaluation context
    Root(String),
    /// Result of another expression
    Expression(BoxExpr),
}

/// Attribute path, e.g. `user.address.city`
#[derive(Debug, Clone)]
pub struct Path {
    pub domain_type: DomainTypeRef,
    pub base: PathBase,
    /// Attributes navigated in order; empty for a bare root reference
    pub attributes: Vec<Arc<EntityAttribute>>,
}

impl Path {
    /// Bare reference to a root alias
    pub fn root(alias: impl Into<String>, domain_type: DomainTypeRef) -> Self {
        Self {
            domain_type,
            base: PathBase::Root(alias.into()),
            attributes: Vec::new(),
        }
    }

    /// Path from a root alias through an attribute chain.
    ///
    /// The path type is the type of the last attribute, or `root_type` when
    /// the chain is empty.
    pub fn from_root(
        alias: impl Into<String>,
        root_type: DomainTypeRef,
        attributes: Vec<Arc<EntityAttribute>>,
    ) -> Self {
        let domain_type = attributes
            .last()
            .map_or(root_type, |a| a.domain_type().clone());
        Self {
            domain_type,
            base: PathBase::Root(alias.into()),
            attributes,
        }
    }

    /// Path from the result of a base expression
    pub fn from_expression(base: Expression, attributes: Vec<Arc<EntityAttribute>>) -> Self {
        let domain_type = attributes
            .last()
            .map_or_else(|| base.domain_type().clone(), |a| a.domain_type().clone());
        Self {
            domain_type,
            base: PathBase::Expression(base.boxed()),
            attributes,
        }
    }
}

/// Signed operand: `-expr` or `+expr`
#[derive(Debug, Clone)]
pub struct ArithmeticFactor {
    pub domain_type: DomainTypeRef,
    pub expression: BoxExpr,
    pub invert_signum: bool,
}

impl ArithmeticFactor {
    pub fn new(expression: Expression, invert_signum: bool) -> Self {
        Self {
            domain_type: expression.domain_type().clone(),
            expression: expression.boxed(),
            invert_signum,
        }
    }
}

/// Binary arithmetic node; its type is the result type that owns the
/// arithmetic interpreter
#[derive(Debug, Clone)]
pub struct ChainingArithmeticExpression {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub right: BoxExpr,
    pub operator: DomainOperator,
}

impl ChainingArithmeticExpression {
    pub fn new(domain_type: DomainTypeRef, left: Expression, right: Expression, operator: DomainOperator) -> Self {
        Self {
            domain_type,
            left: left.boxed(),
            right: right.boxed(),
            operator,
        }
    }
}

/// Argument supplied to a function invocation
#[derive(Debug, Clone)]
pub struct ArgumentBinding {
    pub argument: Arc<DomainFunctionArgument>,
    pub expression: Expression,
}

/// Call of a domain function
#[derive(Debug, Clone)]
pub struct FunctionInvocation {
    pub domain_type: DomainTypeRef,
    pub function: Arc<DomainFunction>,
    /// Supplied arguments, in source order; trailing arguments may be omitted
    pub arguments: Vec<ArgumentBinding>,
}

impl FunctionInvocation {
    /// Invocation typed with the function's declared result type
    pub fn new(function: Arc<DomainFunction>) -> Self {
        Self {
            domain_type: function.result_type().clone(),
            function,
            arguments: Vec::new(),
        }
    }

    /// Bind the declared argument at `position`.
    ///
    /// Positions the function does not declare are ignored; the compiler that
    /// produces trees never emits them.
    pub fn with_argument(mut self, position: usize, expression: Expression) -> Self {
        if let Some(argument) = self.function.argument(position).cloned() {
            self.arguments.push(ArgumentBinding { argument, expression });
        }
        self
    }

    /// Bind an argument by its declared name
    pub fn with_named_argument(mut self, name: &str, expression: Expression) -> Self {
        if let Some(argument) = self.function.argument_by_name(name).cloned() {
            self.arguments.push(ArgumentBinding { argument, expression });
        }
        self
    }
}
