//! Positional view over evaluated function arguments

use crate::domain::DomainTypeRef;
use crate::error::{EvalError, EvalResult};
use domex_types::Value;
use smallvec::SmallVec;

/// Fixed-size, positional view over the evaluated arguments of one function
/// invocation.
///
/// The view is sized to the function's declared arity. Positions that were not
/// supplied hold `Value::Null` and no type. Access past the arity fails with
/// [`EvalError::IndexOutOfBounds`].
#[derive(Debug, Clone, Default)]
pub struct DomainFunctionArguments {
    values: SmallVec<[Value; 4]>,
    types: SmallVec<[Option<DomainTypeRef>; 4]>,
    assigned: usize,
}

impl DomainFunctionArguments {
    /// View for a function without arguments
    pub fn empty() -> Self {
        Self::default()
    }

    /// Unassigned view of the given arity
    pub fn with_arity(arity: usize) -> Self {
        Self {
            values: SmallVec::from_elem(Value::Null, arity),
            types: SmallVec::from_elem(None, arity),
            assigned: 0,
        }
    }

    /// Assign the value at `position` together with the type of the
    /// expression that produced it
    pub fn assign(&mut self, position: usize, value: Value, domain_type: DomainTypeRef) -> EvalResult<()> {
        let arity = self.arity();
        let slot = self
            .values
            .get_mut(position)
            .ok_or(EvalError::IndexOutOfBounds { position, arity })?;
        *slot = value;
        self.types[position] = Some(domain_type);
        self.assigned += 1;
        Ok(())
    }

    /// Value at `position`, `Value::Null` when the argument was not supplied
    pub fn value(&self, position: usize) -> EvalResult<&Value> {
        self.values.get(position).ok_or(EvalError::IndexOutOfBounds {
            position,
            arity: self.arity(),
        })
    }

    /// Type of the expression supplied at `position`
    pub fn domain_type(&self, position: usize) -> EvalResult<Option<&DomainTypeRef>> {
        self.types
            .get(position)
            .map(Option::as_ref)
            .ok_or(EvalError::IndexOutOfBounds {
                position,
                arity: self.arity(),
            })
    }

    /// Declared arity
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Number of positions that were supplied by the invocation
    pub fn assigned_arguments(&self) -> usize {
        self.assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainType;

    #[test]
    fn test_unassigned_positions_are_null() {
        let args = DomainFunctionArguments::with_arity(2);
        assert_eq!(args.value(0), Ok(&Value::Null));
        assert_eq!(args.value(1), Ok(&Value::Null));
        assert_eq!(args.domain_type(1), Ok(None));
        assert_eq!(args.assigned_arguments(), 0);
    }

    #[test]
    fn test_access_past_arity_fails() {
        let args = DomainFunctionArguments::with_arity(2);
        assert_eq!(
            args.value(2),
            Err(EvalError::IndexOutOfBounds { position: 2, arity: 2 })
        );
        assert!(DomainFunctionArguments::empty().value(0).is_err());
    }

    #[test]
    fn test_assign() {
        let int = DomainType::basic("Integer").into_ref();
        let mut args = DomainFunctionArguments::with_arity(1);
        args.assign(0, Value::Integer(4), int.clone()).unwrap();
        assert_eq!(args.value(0), Ok(&Value::Integer(4)));
        assert_eq!(args.domain_type(0).unwrap().map(|t| t.name()), Some("Integer"));
        assert!(args.assign(1, Value::Null, int).is_err());
    }
}
