//! Logical predicates
//!
//! Implements: compound AND/OR, IS NULL, IS EMPTY and boolean expressions
//! used as predicates. Unknown is `None` throughout.

use crate::engine::ExpressionEngine;
use domex_ast::{CompoundPredicate, ExpressionPredicate, IsEmptyPredicate, IsNullPredicate};
use domex_model::{EvalError, EvalResult, EvaluationContext};
use domex_types::Value;

impl ExpressionEngine {
    /// Evaluate a conjunction or disjunction.
    ///
    /// Members are evaluated in order. The first unknown member makes the
    /// whole predicate unknown without looking at later members, even ones
    /// that could have decided the result.
    ///
    /// An empty member list counts as "all true" for AND and "all false" for
    /// OR, so `AND()` is true and `OR()` is false before negation. An empty
    /// conjunction therefore does not yield its negation flag.
    ///
    /// | kind | members                  | result      |
    /// |------|--------------------------|-------------|
    /// | AND  | none                     | not negated |
    /// | AND  | unknown before any false | unknown     |
    /// | AND  | a false                  | negated     |
    /// | AND  | all true                 | not negated |
    /// | OR   | none                     | negated     |
    /// | OR   | unknown before any true  | unknown     |
    /// | OR   | a true                   | not negated |
    /// | OR   | all false                | negated     |
    pub fn eval_compound(&self, predicate: &CompoundPredicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        let negated = predicate.negated;
        // A conjunction is decided by its first false member, a disjunction by
        // its first true one.
        let decisive = !predicate.conjunction;
        for member in &predicate.predicates {
            match self.eval_predicate(member, ctx)? {
                None => return Ok(None),
                Some(b) if b == decisive => return Ok(Some(decisive != negated)),
                Some(_) => {}
            }
        }
        Ok(Some(decisive == negated))
    }

    /// `IS [NOT] NULL` is never unknown
    pub fn eval_is_null(&self, predicate: &IsNullPredicate, ctx: &EvaluationContext) -> EvalResult<bool> {
        let value = self.eval(&predicate.left, ctx)?.value;
        Ok(!value.is_null() == predicate.negated)
    }

    /// `IS [NOT] EMPTY` over a collection; an absent operand is unknown
    pub fn eval_is_empty(&self, predicate: &IsEmptyPredicate, ctx: &EvaluationContext) -> EvalResult<Option<bool>> {
        match self.eval(&predicate.left, ctx)?.value {
            Value::Null => Ok(None),
            Value::Collection(items) => Ok(Some(items.is_empty() != predicate.negated)),
            other => Err(EvalError::type_mismatch("Collection", other.kind_name())),
        }
    }

    /// Boolean expression used as a predicate
    pub fn eval_expression_predicate(
        &self,
        predicate: &ExpressionPredicate,
        ctx: &EvaluationContext,
    ) -> EvalResult<Option<bool>> {
        match self.eval(&predicate.expression, ctx)?.value {
            Value::Null => Ok(None),
            Value::Boolean(b) => Ok(Some(b != predicate.negated)),
            other => Err(EvalError::type_mismatch("Boolean", other.kind_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::ExpressionEngine;
    use domex_ast::{CompoundPredicate, Expression, IsEmptyPredicate, IsNullPredicate, Literal, Predicate};
    use domex_model::{DomainModel, DomainType, DomainTypeRef, EvalError};
    use domex_types::Value;
    use std::sync::Arc;

    fn engine() -> ExpressionEngine {
        ExpressionEngine::new(Arc::new(DomainModel::default()))
    }

    fn boolean() -> DomainTypeRef {
        DomainType::basic("Boolean").into_ref()
    }

    fn is_null(value: Value, negated: bool) -> Predicate {
        let int = DomainType::basic("Integer").into_ref();
        IsNullPredicate::new(boolean(), Literal::scalar(int, value).into(), negated).into()
    }

    #[test]
    fn test_empty_compounds() {
        let engine = engine();
        let and = Predicate::from(CompoundPredicate::and(boolean(), vec![]));
        let or = Predicate::from(CompoundPredicate::or(boolean(), vec![]));
        assert_eq!(engine.eval_predicate(&and, &Default::default()), Ok(Some(true)));
        assert_eq!(engine.eval_predicate(&or, &Default::default()), Ok(Some(false)));

        let nand = Predicate::from(CompoundPredicate::and(boolean(), vec![]).negate());
        let nor = Predicate::from(CompoundPredicate::or(boolean(), vec![]).negate());
        assert_eq!(engine.eval_predicate(&nand, &Default::default()), Ok(Some(false)));
        assert_eq!(engine.eval_predicate(&nor, &Default::default()), Ok(Some(true)));
    }

    #[test]
    fn test_or_decided_by_true_member() {
        let or = Predicate::from(CompoundPredicate::or(
            boolean(),
            vec![is_null(Value::Integer(1), false), is_null(Value::Null, false)],
        ));
        assert_eq!(engine().eval_predicate(&or, &Default::default()), Ok(Some(true)));
    }

    #[test]
    fn test_is_null_truth_table() {
        let engine = engine();
        let ctx = Default::default();
        assert_eq!(engine.eval_predicate(&is_null(Value::Null, false), &ctx), Ok(Some(true)));
        assert_eq!(engine.eval_predicate(&is_null(Value::Null, true), &ctx), Ok(Some(false)));
        assert_eq!(engine.eval_predicate(&is_null(Value::Integer(1), false), &ctx), Ok(Some(false)));
        assert_eq!(engine.eval_predicate(&is_null(Value::Integer(1), true), &ctx), Ok(Some(true)));
    }

    #[test]
    fn test_is_empty_requires_collection() {
        let int = DomainType::basic("Integer").into_ref();
        let pred = Predicate::from(IsEmptyPredicate::new(
            boolean(),
            Expression::from(Literal::scalar(int, 3i64)),
            false,
        ));
        assert_eq!(
            engine().eval_predicate(&pred, &Default::default()),
            Err(EvalError::type_mismatch("Collection", "Integer"))
        );
    }
}
