//! Domain and comparison operators

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Arithmetic operators resolved through a type's arithmetic interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainOperator {
    /// Addition
    Plus,
    /// Subtraction
    Minus,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Remainder
    Modulo,
    /// Sign inversion
    UnaryMinus,
    /// Unary plus
    UnaryPlus,
}

impl DomainOperator {
    /// Check if the operator takes a single operand
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::UnaryMinus | Self::UnaryPlus)
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Plus | Self::UnaryPlus => "+",
            Self::Minus | Self::UnaryMinus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }
}

impl fmt::Display for DomainOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Modulo => "MODULO",
            Self::UnaryMinus => "UNARY_MINUS",
            Self::UnaryPlus => "UNARY_PLUS",
        };
        f.write_str(name)
    }
}

/// Comparison operators resolved through a type's comparison interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Lower,
    LowerOrEqual,
}

impl ComparisonOperator {
    /// Operator that yields the opposite result for the same operands
    pub const fn inverse(&self) -> Self {
        match self {
            Self::Equal => Self::NotEqual,
            Self::NotEqual => Self::Equal,
            Self::Greater => Self::LowerOrEqual,
            Self::GreaterOrEqual => Self::Lower,
            Self::Lower => Self::GreaterOrEqual,
            Self::LowerOrEqual => Self::Greater,
        }
    }

    /// Operator that yields the same result with the operands swapped
    pub const fn mirror(&self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::Greater => Self::Lower,
            Self::GreaterOrEqual => Self::LowerOrEqual,
            Self::Lower => Self::Greater,
            Self::LowerOrEqual => Self::GreaterOrEqual,
        }
    }

    /// Check if only equality semantics are needed to answer this operator
    pub const fn is_equality(&self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Decide the operator from the ordering of its operands
    pub fn test(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Lower => ordering == Ordering::Less,
            Self::LowerOrEqual => ordering != Ordering::Greater,
        }
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Lower => "<",
            Self::LowerOrEqual => "<=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::Lower => "LOWER",
            Self::LowerOrEqual => "LOWER_OR_EQUAL",
        };
        f.write_str(name)
    }
}
