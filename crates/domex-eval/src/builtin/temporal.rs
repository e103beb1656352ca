//! Temporal interpreters
//!
//! Four interpreters cover calendar dates, instants and intervals:
//! - `DateOperatorInterpreter`: dates, promoted to an instant at UTC start of
//!   day when compared against an instant
//! - `LocalDateOperatorInterpreter`: dates, promoted at start of day in the
//!   system time zone
//! - `TimestampOperatorInterpreter`: instants; a date on the right is compared
//!   by the date's own type so that both operand orders agree
//! - `IntervalOperatorInterpreter`: intervals on their own
//!
//! The two date interpreters differ only in how a date becomes an instant.
//! A domain type picks one of them deliberately.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use domex_model::{ComparisonOperatorInterpreter, DomainOperatorInterpreter, DomainType, EvalError, EvalResult, EvaluationContext};
use domex_types::{ComparisonOperator, DomainOperator, TemporalInterval, Value};

/// Start of day in UTC
pub fn utc_start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Start of day in the system time zone.
///
/// When a zone transition skips midnight there is no such instant and the
/// date is rejected.
pub fn local_start_of_day(date: NaiveDate) -> EvalResult<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| EvalError::illegal_argument(format!("{} has no local start of day", date)))
}

/// Interval PLUS/MINUS interval
fn interval_arithmetic(
    a: &TemporalInterval,
    b: &TemporalInterval,
    left: &Value,
    right: &Value,
    operator: DomainOperator,
) -> EvalResult<Value> {
    let result = match operator {
        DomainOperator::Plus => a.add(b),
        DomainOperator::Minus => a.subtract(b),
        _ => return Err(EvalError::unsupported_arithmetic(operator, left, right)),
    };
    result
        .map(Value::Interval)
        .ok_or_else(|| EvalError::overflow(format!("{} {} {}", a, operator.symbol(), b)))
}

fn shift_date(
    date: NaiveDate,
    interval: &TemporalInterval,
    left: &Value,
    right: &Value,
    operator: DomainOperator,
) -> EvalResult<Value> {
    let shifted = match operator {
        DomainOperator::Plus => interval.add_to_date(date),
        DomainOperator::Minus => interval.subtract_from_date(date),
        _ => return Err(EvalError::unsupported_arithmetic(operator, left, right)),
    };
    shifted
        .map(Value::Date)
        .ok_or_else(|| EvalError::overflow(format!("{} {} {}", date, operator.symbol(), interval)))
}

fn shift_instant(
    instant: DateTime<Utc>,
    interval: &TemporalInterval,
    left: &Value,
    right: &Value,
    operator: DomainOperator,
) -> EvalResult<Value> {
    let shifted = match operator {
        DomainOperator::Plus => interval.add_to_instant(instant),
        DomainOperator::Minus => interval.subtract_from_instant(instant),
        _ => return Err(EvalError::unsupported_arithmetic(operator, left, right)),
    };
    shifted
        .map(Value::Instant)
        .ok_or_else(|| EvalError::overflow(format!("{} {} {}", instant.to_rfc3339(), operator.symbol(), interval)))
}

/// Dates, promoted to UTC start of day against instants
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOperatorInterpreter;

impl ComparisonOperatorInterpreter for DateOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        let Value::Date(date) = left else {
            return Err(EvalError::illegal_operands(left, right));
        };
        let ordering = match right {
            Value::Date(other) => date.cmp(other),
            Value::Instant(instant) => utc_start_of_day(*date).cmp(instant),
            _ => return Err(EvalError::unsupported_comparison(operator, left, right)),
        };
        Ok(Some(operator.test(ordering)))
    }
}

impl DomainOperatorInterpreter for DateOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _target_type: &DomainType,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        match (left, right) {
            (Value::Interval(a), Value::Interval(b)) => interval_arithmetic(a, b, left, right, operator),
            (Value::Date(date), Value::Interval(interval)) => shift_date(*date, interval, left, right, operator),
            // Subtracting a date from an interval has no meaning
            (Value::Interval(interval), Value::Date(date)) if operator == DomainOperator::Plus => {
                shift_date(*date, interval, left, right, operator)
            }
            (Value::Interval(_), Value::Date(_)) => Err(EvalError::unsupported_arithmetic(operator, left, right)),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

/// Dates, promoted to start of day in the system time zone against instants.
///
/// Date and interval arithmetic happens on the promoted instant and yields an
/// instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateOperatorInterpreter;

impl ComparisonOperatorInterpreter for LocalDateOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        let Value::Date(date) = left else {
            return Err(EvalError::illegal_operands(left, right));
        };
        let ordering = match right {
            Value::Date(other) => date.cmp(other),
            Value::Instant(instant) => local_start_of_day(*date)?.cmp(instant),
            _ => return Err(EvalError::unsupported_comparison(operator, left, right)),
        };
        Ok(Some(operator.test(ordering)))
    }
}

impl DomainOperatorInterpreter for LocalDateOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _target_type: &DomainType,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        match (left, right) {
            (Value::Interval(a), Value::Interval(b)) => interval_arithmetic(a, b, left, right, operator),
            (Value::Date(date), Value::Interval(interval)) => {
                shift_instant(local_start_of_day(*date)?, interval, left, right, operator)
            }
            (Value::Interval(interval), Value::Date(date)) if operator == DomainOperator::Plus => {
                shift_instant(local_start_of_day(*date)?, interval, left, right, operator)
            }
            (Value::Interval(_), Value::Date(_)) => Err(EvalError::unsupported_arithmetic(operator, left, right)),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

/// Instants.
///
/// A date on the right goes to the right type's comparison interpreter with
/// the operands swapped, so its promotion rule applies. Without one the date
/// is promoted to UTC start of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampOperatorInterpreter;

impl ComparisonOperatorInterpreter for TimestampOperatorInterpreter {
    fn interpret(
        &self,
        ctx: &EvaluationContext,
        left_type: &DomainType,
        right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        let Value::Instant(instant) = left else {
            return Err(EvalError::illegal_operands(left, right));
        };
        let ordering = match right {
            Value::Instant(other) => instant.cmp(other),
            Value::Date(date) => match right_type.comparison_interpreter() {
                Some(interpreter) => {
                    return interpreter.interpret(ctx, right_type, left_type, right, left, operator.mirror());
                }
                None => instant.cmp(&utc_start_of_day(*date)),
            },
            _ => return Err(EvalError::unsupported_comparison(operator, left, right)),
        };
        Ok(Some(operator.test(ordering)))
    }
}

impl DomainOperatorInterpreter for TimestampOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _target_type: &DomainType,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        match (left, right) {
            (Value::Interval(a), Value::Interval(b)) => interval_arithmetic(a, b, left, right, operator),
            (Value::Instant(instant), Value::Interval(interval)) => {
                shift_instant(*instant, interval, left, right, operator)
            }
            (Value::Interval(interval), Value::Instant(instant)) if operator == DomainOperator::Plus => {
                shift_instant(*instant, interval, left, right, operator)
            }
            (Value::Interval(_), Value::Instant(_)) => Err(EvalError::unsupported_arithmetic(operator, left, right)),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

/// Intervals: equality, PLUS/MINUS and sign inversion
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalOperatorInterpreter;

impl ComparisonOperatorInterpreter for IntervalOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: ComparisonOperator,
    ) -> EvalResult<Option<bool>> {
        match (left, right) {
            (Value::Interval(a), Value::Interval(b)) => match operator {
                ComparisonOperator::Equal => Ok(Some(a == b)),
                ComparisonOperator::NotEqual => Ok(Some(a != b)),
                // Components do not convert into each other, so there is no order
                _ => Err(EvalError::unsupported_comparison(operator, left, right)),
            },
            (Value::Interval(_), _) => Err(EvalError::unsupported_comparison(operator, left, right)),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

impl DomainOperatorInterpreter for IntervalOperatorInterpreter {
    fn interpret(
        &self,
        _ctx: &EvaluationContext,
        _target_type: &DomainType,
        _left_type: &DomainType,
        _right_type: &DomainType,
        left: &Value,
        right: &Value,
        operator: DomainOperator,
    ) -> EvalResult<Value> {
        match (left, right) {
            (Value::Interval(a), _) if operator == DomainOperator::UnaryMinus => a
                .negate()
                .map(Value::Interval)
                .ok_or_else(|| EvalError::overflow(format!("-{}", a))),
            (Value::Interval(a), _) if operator == DomainOperator::UnaryPlus => Ok(Value::Interval(*a)),
            (Value::Interval(a), Value::Interval(b)) => interval_arithmetic(a, b, left, right, operator),
            _ => Err(EvalError::illegal_operands(left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use std::sync::Arc;

    fn ctx() -> EvaluationContext {
        EvaluationContext::new()
    }

    fn date_type() -> DomainType {
        DomainType::basic("Date")
    }

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    fn instant(y: i32, m: u32, d: u32, h: u32) -> Value {
        Value::Instant(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn compare(interpreter: &dyn ComparisonOperatorInterpreter, l: &Value, r: &Value, op: ComparisonOperator) -> EvalResult<Option<bool>> {
        let ty = date_type();
        interpreter.interpret(&ctx(), &ty, &ty, l, r, op)
    }

    fn arithmetic(interpreter: &dyn DomainOperatorInterpreter, l: &Value, r: &Value, op: DomainOperator) -> EvalResult<Value> {
        let ty = date_type();
        interpreter.interpret(&ctx(), &ty, &ty, &ty, l, r, op)
    }

    #[test]
    fn test_date_vs_instant_promotes_to_utc_midnight() {
        let midnight = instant(2024, 1, 1, 0);
        assert_eq!(
            compare(&DateOperatorInterpreter, &date(2024, 1, 1), &midnight, ComparisonOperator::Equal),
            Ok(Some(true))
        );
        assert_eq!(
            compare(&DateOperatorInterpreter, &date(2024, 1, 2), &midnight, ComparisonOperator::Greater),
            Ok(Some(true))
        );
        assert_eq!(
            compare(&DateOperatorInterpreter, &date(2024, 1, 1), &instant(2024, 1, 1, 1), ComparisonOperator::Lower),
            Ok(Some(true))
        );
    }

    #[test]
    fn test_date_comparison_rejects_foreign_operands() {
        assert!(matches!(
            compare(&DateOperatorInterpreter, &Value::Integer(1), &date(2024, 1, 1), ComparisonOperator::Equal),
            Err(EvalError::IllegalArgument { .. })
        ));
        assert!(matches!(
            compare(&DateOperatorInterpreter, &date(2024, 1, 1), &Value::Integer(1), ComparisonOperator::Equal),
            Err(EvalError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_local_date_comparison_matches_local_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let midnight = Value::Instant(local_start_of_day(day).expect("local midnight"));
        assert_eq!(
            compare(&LocalDateOperatorInterpreter, &Value::Date(day), &midnight, ComparisonOperator::Equal),
            Ok(Some(true))
        );
    }

    #[test]
    fn test_date_plus_interval() {
        let month = Value::Interval(TemporalInterval::months(1));
        assert_eq!(
            arithmetic(&DateOperatorInterpreter, &date(2024, 1, 31), &month, DomainOperator::Plus),
            Ok(date(2024, 2, 29))
        );
        assert_eq!(
            arithmetic(&DateOperatorInterpreter, &month, &date(2024, 1, 31), DomainOperator::Plus),
            Ok(date(2024, 2, 29))
        );
        assert_eq!(
            arithmetic(&DateOperatorInterpreter, &date(2024, 3, 1), &Value::Interval(TemporalInterval::days(1)), DomainOperator::Minus),
            Ok(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_interval_minus_date_is_unsupported() {
        let day = Value::Interval(TemporalInterval::days(1));
        assert!(matches!(
            arithmetic(&DateOperatorInterpreter, &day, &date(2024, 1, 1), DomainOperator::Minus),
            Err(EvalError::UnsupportedOperator { .. })
        ));
        assert!(matches!(
            arithmetic(&TimestampOperatorInterpreter, &day, &instant(2024, 1, 1, 0), DomainOperator::Minus),
            Err(EvalError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_local_date_arithmetic_yields_instant() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let start = local_start_of_day(day).expect("local midnight");
        let result = arithmetic(
            &LocalDateOperatorInterpreter,
            &Value::Date(day),
            &Value::Interval(TemporalInterval::hours(2)),
            DomainOperator::Plus,
        );
        assert_eq!(result, Ok(Value::Instant(start + chrono::TimeDelta::hours(2))));
    }

    #[test]
    fn test_timestamp_interpreter() {
        let noon = instant(2024, 1, 1, 12);
        assert_eq!(
            compare(&TimestampOperatorInterpreter, &noon, &date(2024, 1, 1), ComparisonOperator::Greater),
            Ok(Some(true))
        );
        assert_eq!(
            arithmetic(&TimestampOperatorInterpreter, &noon, &Value::Interval(TemporalInterval::hours(12)), DomainOperator::Plus),
            Ok(instant(2024, 1, 2, 0))
        );
    }

    #[test]
    fn test_interval_interpreter() {
        let a = Value::Interval(TemporalInterval::days(2));
        let b = Value::Interval(TemporalInterval::days(3));
        assert_eq!(
            arithmetic(&IntervalOperatorInterpreter, &a, &b, DomainOperator::Plus),
            Ok(Value::Interval(TemporalInterval::days(5)))
        );
        assert_eq!(
            arithmetic(&IntervalOperatorInterpreter, &a, &a, DomainOperator::UnaryMinus),
            Ok(Value::Interval(TemporalInterval::days(-2)))
        );
        assert_eq!(compare(&IntervalOperatorInterpreter, &a, &b, ComparisonOperator::NotEqual), Ok(Some(true)));
        assert!(compare(&IntervalOperatorInterpreter, &a, &b, ComparisonOperator::Greater).is_err());
    }

    #[test]
    fn test_instant_against_local_date_agrees_in_both_orders() {
        let local_date = DomainType::basic("LocalDate").with_comparison_interpreter(Arc::new(LocalDateOperatorInterpreter));
        let timestamp = DomainType::basic("Timestamp").with_comparison_interpreter(Arc::new(TimestampOperatorInterpreter));
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let start = local_start_of_day(day).expect("local midnight");
        let date = Value::Date(day);

        let cases = [
            (start, ComparisonOperator::Equal, true),
            (start, ComparisonOperator::NotEqual, false),
            (start + TimeDelta::hours(1), ComparisonOperator::Greater, true),
            (start + TimeDelta::hours(1), ComparisonOperator::LowerOrEqual, false),
            (start - TimeDelta::minutes(1), ComparisonOperator::Lower, true),
        ];
        for (instant, operator, expected) in cases {
            let instant = Value::Instant(instant);
            assert_eq!(
                ComparisonOperatorInterpreter::interpret(&TimestampOperatorInterpreter, &ctx(), &timestamp, &local_date, &instant, &date, operator),
                Ok(Some(expected)),
                "{instant} {operator} {date}"
            );
            assert_eq!(
                ComparisonOperatorInterpreter::interpret(&LocalDateOperatorInterpreter, &ctx(), &local_date, &timestamp, &date, &instant, operator.mirror()),
                Ok(Some(expected)),
                "{date} {} {instant}",
                operator.mirror()
            );
        }
    }

    #[test]
    fn test_interval_overflow_is_an_error() {
        let longest = Value::Interval(TemporalInterval::days(i32::MAX));
        let day = Value::Interval(TemporalInterval::days(1));
        assert!(matches!(
            arithmetic(&IntervalOperatorInterpreter, &longest, &day, DomainOperator::Plus),
            Err(EvalError::Overflow { .. })
        ));
        assert!(matches!(
            arithmetic(&DateOperatorInterpreter, &Value::Interval(TemporalInterval::days(i32::MIN)), &day, DomainOperator::Minus),
            Err(EvalError::Overflow { .. })
        ));
        let shortest = Value::Interval(TemporalInterval::hours(i32::MIN));
        assert!(matches!(
            arithmetic(&IntervalOperatorInterpreter, &shortest, &shortest, DomainOperator::UnaryMinus),
            Err(EvalError::Overflow { .. })
        ));
    }
}
