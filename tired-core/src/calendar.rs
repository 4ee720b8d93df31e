//! Calendar arithmetic behind a trait, so "now" and day math are injected
//! instead of read from ambient global state. Tests pin time with fixed
//! dates; production uses [`CivilCalendar`].

use chrono::{Datelike, Duration, NaiveDate};

pub trait Calendar {
    /// Signed whole-day difference from `from` to `to` (floor semantics:
    /// negative when `to` precedes `from`).
    fn day_offset(&self, from: NaiveDate, to: NaiveDate) -> i64;

    fn add_days(&self, date: NaiveDate, n: i64) -> NaiveDate;
}

/// Plain proleptic-Gregorian day arithmetic via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct CivilCalendar;

impl Calendar for CivilCalendar {
    fn day_offset(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        to.signed_duration_since(from).num_days()
    }

    fn add_days(&self, date: NaiveDate, n: i64) -> NaiveDate {
        date + Duration::days(n)
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_offset_is_signed() {
        let cal = CivilCalendar;
        assert_eq!(cal.day_offset(d(2026, 3, 2), d(2026, 3, 5)), 3);
        assert_eq!(cal.day_offset(d(2026, 3, 5), d(2026, 3, 2)), -3);
        assert_eq!(cal.day_offset(d(2026, 3, 2), d(2026, 3, 2)), 0);
    }

    #[test]
    fn test_add_days_crosses_month_boundary() {
        let cal = CivilCalendar;
        assert_eq!(cal.add_days(d(2026, 2, 27), 3), d(2026, 3, 2));
        assert_eq!(cal.add_days(d(2026, 3, 2), -3), d(2026, 2, 27));
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2026-03-04 is a Wednesday.
        assert_eq!(week_start_of(d(2026, 3, 4)), d(2026, 3, 2));
        // Monday maps to itself, Sunday back to the preceding Monday.
        assert_eq!(week_start_of(d(2026, 3, 2)), d(2026, 3, 2));
        assert_eq!(week_start_of(d(2026, 3, 8)), d(2026, 3, 2));
    }
}
