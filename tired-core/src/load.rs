//! Daily/weekly load summaries, used by callers to flag overloaded days.
//! Pure aggregation over the task list; no planning side effects.

use chrono::NaiveDate;

use crate::calendar::{Calendar, CivilCalendar};
use crate::task::Task;

/// Sum of estimated minutes over tasks planned on `date`. A missing
/// estimate counts as 0 here (unlike placement, which assumes 60).
pub fn daily_minutes(tasks: &[Task], date: NaiveDate) -> i32 {
    tasks
        .iter()
        .filter(|t| t.planned_date == Some(date))
        .map(|t| t.estimated_minutes.unwrap_or(0))
        .sum()
}

/// Strictly over budget; a day at exactly `capacity_minutes` is fine.
pub fn is_overloaded(tasks: &[Task], date: NaiveDate, capacity_minutes: i32) -> bool {
    daily_minutes(tasks, date) > capacity_minutes
}

/// Minutes per day for the week starting at `week_start`, index 0 = day one.
pub fn weekly_load(tasks: &[Task], week_start: NaiveDate) -> [i32; 7] {
    let cal = CivilCalendar;
    let mut out = [0i32; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = daily_minutes(tasks, cal.add_days(week_start, i as i64));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_daily_minutes_treats_missing_estimate_as_zero() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let day = d(2026, 3, 4);
        let tasks = vec![
            Task::new("a", "a", now).with_planned_date(day).with_estimate(45),
            Task::new("b", "b", now).with_planned_date(day).with_estimate(45),
            Task::new("c", "unsized", now).with_planned_date(day),
            Task::new("d", "elsewhere", now)
                .with_planned_date(d(2026, 3, 5))
                .with_estimate(500),
        ];

        assert_eq!(daily_minutes(&tasks, day), 90);
    }

    #[test]
    fn test_overload_is_strict() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let day = d(2026, 3, 4);
        let tasks = vec![Task::new("a", "a", now).with_planned_date(day).with_estimate(120)];

        assert!(!is_overloaded(&tasks, day, 120));
        assert!(is_overloaded(&tasks, day, 119));
    }

    #[test]
    fn test_weekly_load_indexes_from_week_start() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let tasks = vec![
            Task::new("a", "mon", now)
                .with_planned_date(d(2026, 3, 2))
                .with_estimate(30),
            Task::new("b", "sun", now)
                .with_planned_date(d(2026, 3, 8))
                .with_estimate(40),
            Task::new("c", "outside", now)
                .with_planned_date(d(2026, 3, 9))
                .with_estimate(99),
        ];

        let load = weekly_load(&tasks, d(2026, 3, 2));
        assert_eq!(load, [30, 0, 0, 0, 0, 0, 40]);
    }
}
