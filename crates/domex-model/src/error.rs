//! Evaluation errors
//!
//! Every failure aborts the whole evaluation. An absent value is not an error:
//! it travels as `Value::Null` and is never reported through `EvalError`.

use domex_types::{ComparisonOperator, DomainOperator, Value, ValueKind};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Operand values of a kind the interpreter does not recognize
    #[error("Illegal arguments: {message}")]
    IllegalArgument { message: String },

    /// Recognized operands combined with an operator the interpreter does not implement
    #[error("Can't handle the operator {operator} for the arguments [{left}, {right}]")]
    UnsupportedOperator {
        operator: String,
        left: String,
        right: String,
    },

    /// A type was asked for an interpreter it does not declare
    #[error("No {capability} available for type: {type_name}")]
    MissingInterpreter {
        capability: &'static str,
        type_name: String,
    },

    /// Attribute declared without an accessor
    #[error("No attribute accessor available for attribute: {owner}.{attribute}")]
    MissingAccessor { owner: String, attribute: String },

    /// Function declared without an invoker
    #[error("No function invoker available for function: {function}")]
    MissingInvoker { function: String },

    /// Path root alias absent from the context
    #[error("Root alias '{alias}' is not bound in the evaluation context")]
    UnboundRoot { alias: String },

    /// No converter between the produced kind and the requested shape
    #[error("No converter found for converting {from} to {to}")]
    NoConverter { from: ValueKind, to: ValueKind },

    /// Positional access outside the declared arity
    #[error("Argument position {position} out of bounds for arity {arity}")]
    IndexOutOfBounds { position: usize, arity: usize },

    /// A value did not have the shape the evaluated node requires
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic overflow
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },
}

impl EvalError {
    /// Create an illegal argument error
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    /// Create an illegal argument error naming both operands
    pub fn illegal_operands(left: &Value, right: &Value) -> Self {
        Self::IllegalArgument {
            message: format!("[{}, {}]", describe(left), describe(right)),
        }
    }

    /// Create an unsupported operator error for a comparison
    pub fn unsupported_comparison(operator: ComparisonOperator, left: &Value, right: &Value) -> Self {
        Self::UnsupportedOperator {
            operator: operator.to_string(),
            left: describe(left),
            right: describe(right),
        }
    }

    /// Create an unsupported operator error for an arithmetic operation
    pub fn unsupported_arithmetic(operator: DomainOperator, left: &Value, right: &Value) -> Self {
        Self::UnsupportedOperator {
            operator: operator.to_string(),
            left: describe(left),
            right: describe(right),
        }
    }

    /// Create a missing interpreter error
    pub fn missing_interpreter(capability: &'static str, type_name: impl Into<String>) -> Self {
        Self::MissingInterpreter {
            capability,
            type_name: type_name.into(),
        }
    }

    /// Create a missing accessor error
    pub fn missing_accessor(owner: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAccessor {
            owner: owner.into(),
            attribute: attribute.into(),
        }
    }

    /// Create a missing invoker error
    pub fn missing_invoker(function: impl Into<String>) -> Self {
        Self::MissingInvoker {
            function: function.into(),
        }
    }

    /// Create an unbound root error
    pub fn unbound_root(alias: impl Into<String>) -> Self {
        Self::UnboundRoot { alias: alias.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}

/// `kind value` form used in operand diagnostics
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => format!("{} {}", other.kind_name(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operator_message_names_operands() {
        let err = EvalError::unsupported_comparison(
            ComparisonOperator::Greater,
            &Value::Boolean(true),
            &Value::Integer(1),
        );
        assert_eq!(
            err.to_string(),
            "Can't handle the operator GREATER for the arguments [Boolean true, Integer 1]"
        );
    }

    #[test]
    fn test_no_converter_message() {
        let err = EvalError::NoConverter {
            from: ValueKind::Boolean,
            to: ValueKind::Date,
        };
        assert_eq!(err.to_string(), "No converter found for converting Boolean to Date");
    }
}
