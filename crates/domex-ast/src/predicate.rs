//! Predicate nodes
//!
//! Predicates evaluate to `true`, `false` or unknown (`Value::Null`). Every
//! predicate carries a `negated` flag instead of being wrapped in a separate
//! NOT node.

use crate::{BoxExpr, Expression};
use domex_model::DomainTypeRef;
use domex_types::ComparisonOperator;

/// All predicate kinds
#[derive(Debug, Clone)]
pub enum Predicate {
    /// `left <op> right`
    Comparison(ComparisonPredicate),
    /// `left [NOT] BETWEEN lower AND upper`
    Between(BetweenPredicate),
    /// `left [NOT] IN (items...)`
    In(InPredicate),
    /// Conjunction or disjunction of predicates
    Compound(CompoundPredicate),
    /// `left IS [NOT] NULL`
    IsNull(IsNullPredicate),
    /// `left IS [NOT] EMPTY`
    IsEmpty(IsEmptyPredicate),
    /// Boolean-valued expression used as a predicate
    Expression(ExpressionPredicate),
}

impl Predicate {
    /// Declared domain type, the boolean type of the model
    pub fn domain_type(&self) -> &DomainTypeRef {
        match self {
            Self::Comparison(p) => &p.domain_type,
            Self::Between(p) => &p.domain_type,
            Self::In(p) => &p.domain_type,
            Self::Compound(p) => &p.domain_type,
            Self::IsNull(p) => &p.domain_type,
            Self::IsEmpty(p) => &p.domain_type,
            Self::Expression(p) => &p.domain_type,
        }
    }

    pub fn is_negated(&self) -> bool {
        match self {
            Self::Comparison(p) => p.negated,
            Self::Between(p) => p.negated,
            Self::In(p) => p.negated,
            Self::Compound(p) => p.negated,
            Self::IsNull(p) => p.negated,
            Self::IsEmpty(p) => p.negated,
            Self::Expression(p) => p.negated,
        }
    }
}

macro_rules! impl_into_predicate {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Predicate {
                fn from(value: $node) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$node> for Expression {
                fn from(value: $node) -> Self {
                    Self::Predicate(Predicate::$variant(value))
                }
            }
        )*
    };
}

impl_into_predicate! {
    ComparisonPredicate => Comparison,
    BetweenPredicate => Between,
    InPredicate => In,
    CompoundPredicate => Compound,
    IsNullPredicate => IsNull,
    IsEmptyPredicate => IsEmpty,
    ExpressionPredicate => Expression,
}

/// Binary comparison; negation is applied to the interpreter's answer
#[derive(Debug, Clone)]
pub struct ComparisonPredicate {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub right: BoxExpr,
    pub operator: ComparisonOperator,
    pub negated: bool,
}

impl ComparisonPredicate {
    pub fn new(boolean: DomainTypeRef, left: Expression, operator: ComparisonOperator, right: Expression) -> Self {
        Self {
            domain_type: boolean,
            left: left.boxed(),
            right: right.boxed(),
            operator,
            negated: false,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

#[derive(Debug, Clone)]
pub struct BetweenPredicate {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub lower: BoxExpr,
    pub upper: BoxExpr,
    pub negated: bool,
}

impl BetweenPredicate {
    pub fn new(boolean: DomainTypeRef, left: Expression, lower: Expression, upper: Expression, negated: bool) -> Self {
        Self {
            domain_type: boolean,
            left: left.boxed(),
            lower: lower.boxed(),
            upper: upper.boxed(),
            negated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InPredicate {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub items: Vec<Expression>,
    pub negated: bool,
}

impl InPredicate {
    pub fn new(boolean: DomainTypeRef, left: Expression, items: Vec<Expression>, negated: bool) -> Self {
        Self {
            domain_type: boolean,
            left: left.boxed(),
            items,
            negated,
        }
    }
}

/// `AND`/`OR` over an ordered list of predicates
#[derive(Debug, Clone)]
pub struct CompoundPredicate {
    pub domain_type: DomainTypeRef,
    /// `true` for AND, `false` for OR
    pub conjunction: bool,
    pub predicates: Vec<Predicate>,
    pub negated: bool,
}

impl CompoundPredicate {
    pub fn and(boolean: DomainTypeRef, predicates: Vec<Predicate>) -> Self {
        Self {
            domain_type: boolean,
            conjunction: true,
            predicates,
            negated: false,
        }
    }

    pub fn or(boolean: DomainTypeRef, predicates: Vec<Predicate>) -> Self {
        Self {
            domain_type: boolean,
            conjunction: false,
            predicates,
            negated: false,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

#[derive(Debug, Clone)]
pub struct IsNullPredicate {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub negated: bool,
}

impl IsNullPredicate {
    pub fn new(boolean: DomainTypeRef, left: Expression, negated: bool) -> Self {
        Self {
            domain_type: boolean,
            left: left.boxed(),
            negated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IsEmptyPredicate {
    pub domain_type: DomainTypeRef,
    pub left: BoxExpr,
    pub negated: bool,
}

impl IsEmptyPredicate {
    pub fn new(boolean: DomainTypeRef, left: Expression, negated: bool) -> Self {
        Self {
            domain_type: boolean,
            left: left.boxed(),
            negated,
        }
    }
}

/// Wraps an expression that must produce a boolean
#[derive(Debug, Clone)]
pub struct ExpressionPredicate {
    pub domain_type: DomainTypeRef,
    pub expression: BoxExpr,
    pub negated: bool,
}

impl ExpressionPredicate {
    pub fn new(boolean: DomainTypeRef, expression: Expression, negated: bool) -> Self {
        Self {
            domain_type: boolean,
            expression: expression.boxed(),
            negated,
        }
    }
}
