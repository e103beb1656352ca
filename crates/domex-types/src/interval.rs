//! Temporal intervals - signed composite durations
//!
//! A `TemporalInterval` keeps calendar components (years, months, days) apart
//! from clock components (hours, minutes, seconds) so that adding one month
//! to January 31st clamps to the end of February instead of adding a fixed
//! number of days.

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed composite duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalInterval {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl TemporalInterval {
    /// Create an interval from all components
    pub const fn new(years: i32, months: i32, days: i32, hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Interval with only a day component
    pub const fn days(days: i32) -> Self {
        Self::new(0, 0, days, 0, 0, 0)
    }

    /// Interval with only a month component
    pub const fn months(months: i32) -> Self {
        Self::new(0, months, 0, 0, 0, 0)
    }

    /// Interval with only an hour component
    pub const fn hours(hours: i32) -> Self {
        Self::new(0, 0, 0, hours, 0, 0)
    }

    /// Check if all components are zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Component-wise sum of two intervals; `None` when a component overflows
    pub fn add(&self, other: &Self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_add(other.years)?,
            months: self.months.checked_add(other.months)?,
            days: self.days.checked_add(other.days)?,
            hours: self.hours.checked_add(other.hours)?,
            minutes: self.minutes.checked_add(other.minutes)?,
            seconds: self.seconds.checked_add(other.seconds)?,
        })
    }

    /// Component-wise difference of two intervals
    pub fn subtract(&self, other: &Self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_sub(other.years)?,
            months: self.months.checked_sub(other.months)?,
            days: self.days.checked_sub(other.days)?,
            hours: self.hours.checked_sub(other.hours)?,
            minutes: self.minutes.checked_sub(other.minutes)?,
            seconds: self.seconds.checked_sub(other.seconds)?,
        })
    }

    /// Interval with every component sign-inverted; `None` for `i32::MIN`
    pub fn negate(&self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_neg()?,
            months: self.months.checked_neg()?,
            days: self.days.checked_neg()?,
            hours: self.hours.checked_neg()?,
            minutes: self.minutes.checked_neg()?,
            seconds: self.seconds.checked_neg()?,
        })
    }

    /// Shift a date forward by this interval.
    ///
    /// Clock components roll over into days: `PT24H` moves a date by one day,
    /// `PT-1H` moves it to the previous day. Returns `None` on overflow.
    pub fn add_to_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.apply(date.and_time(NaiveTime::MIN)).map(|dt| dt.date())
    }

    /// Shift a date backward by this interval
    pub fn subtract_from_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.negate()?.add_to_date(date)
    }

    /// Shift an instant forward by this interval, calendar parts in UTC
    pub fn add_to_instant(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.apply(instant.naive_utc()).map(|dt| dt.and_utc())
    }

    /// Shift an instant backward by this interval
    pub fn subtract_from_instant(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.negate()?.add_to_instant(instant)
    }

    fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    fn clock_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    fn apply(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = self.total_months();
        let shifted = if months >= 0 {
            start.checked_add_months(Months::new(u32::try_from(months).ok()?))?
        } else {
            start.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
        };

        let days = i64::from(self.days);
        let shifted = if days >= 0 {
            shifted.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            shifted.checked_sub_days(Days::new(days.unsigned_abs()))?
        };

        shifted.checked_add_signed(TimeDelta::try_seconds(self.clock_seconds())?)
    }
}

/// ISO-8601 duration form, e.g. `P1Y2M3DT4H5M6S`
impl fmt::Display for TemporalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        write!(f, "P")?;
        for (amount, unit) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if amount != 0 {
                write!(f, "{}{}", amount, unit)?;
            }
        }
        if self.hours != 0 || self.minutes != 0 || self.seconds != 0 {
            write!(f, "T")?;
            for (amount, unit) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if amount != 0 {
                    write!(f, "{}{}", amount, unit)?;
                }
            }
        }
        Ok(())
    }
}
