//! Weekly auto-planner: earliest-deadline-first greedy placement into the
//! seven day-buckets of a week, under a soft per-day minute budget.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::calendar::{week_start_of, Calendar, CivilCalendar};
use crate::task::Task;

pub const DEFAULT_WEEKLY_CAPACITY_MINUTES: i32 = 600;

const DAYS_IN_WEEK: usize = 7;
const WORKDAYS_PER_WEEK: i32 = 5;
const DEFAULT_ESTIMATE_MINUTES: i32 = 60;

/// Per-invocation planning options. Constructed, used once, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlanOptions {
    /// First day of the week being planned.
    pub week_start: NaiveDate,
    /// Total minutes budgeted across the week.
    pub weekly_capacity_minutes: i32,
}

impl AutoPlanOptions {
    pub fn for_week(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            weekly_capacity_minutes: DEFAULT_WEEKLY_CAPACITY_MINUTES,
        }
    }

    /// Options for the ISO week containing `now`.
    pub fn current_week(now: DateTime<Utc>) -> Self {
        Self::for_week(week_start_of(now.date_naive()))
    }

    pub fn with_weekly_capacity(mut self, minutes: i32) -> Self {
        self.weekly_capacity_minutes = minutes;
        self
    }

    /// Per-day budget over five working days. Derived, never set directly.
    pub fn daily_capacity_minutes(&self) -> i32 {
        self.weekly_capacity_minutes / WORKDAYS_PER_WEEK
    }
}

/// Weekly planner over an injected [`Calendar`].
#[derive(Debug, Clone, Default)]
pub struct WeekPlanner<C: Calendar> {
    calendar: C,
}

impl WeekPlanner<CivilCalendar> {
    pub fn civil() -> Self {
        Self::new(CivilCalendar)
    }
}

impl<C: Calendar> WeekPlanner<C> {
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// Assign planned dates to unscheduled candidate tasks within
    /// `[week_start, week_start + 6]`.
    ///
    /// Done, locked, or already-scheduled tasks pass through unchanged.
    /// The result has the same length and order as the input; every task
    /// the planner touches gets `is_date_locked` cleared.
    pub fn plan_week(
        &self,
        tasks: &[Task],
        opts: &AutoPlanOptions,
        now: DateTime<Utc>,
    ) -> Vec<Task> {
        let daily_capacity = opts.daily_capacity_minutes();

        // Existing load per day-bucket. Anything already scheduled counts,
        // candidate or not; dates outside the week contribute nothing.
        let mut loads = [0i32; DAYS_IN_WEEK];
        for t in tasks {
            if let Some(date) = t.planned_date {
                let offset = self.calendar.day_offset(opts.week_start, date);
                if (0..DAYS_IN_WEEK as i64).contains(&offset) {
                    loads[offset as usize] += t.estimated_minutes.unwrap_or(0);
                }
            }
        }

        let mut order: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_plan_candidate())
            .map(|(i, _)| i)
            .collect();
        order.sort_by(|&a, &b| deadline_order(&tasks[a], &tasks[b]));

        // May be negative or >= 7 when `now` falls outside the target week;
        // bucket probing wraps with rem_euclid.
        let today_offset = self
            .calendar
            .day_offset(opts.week_start, now.date_naive());

        let mut assigned: HashMap<usize, NaiveDate> = HashMap::new();
        for idx in order {
            let duration = tasks[idx]
                .estimated_minutes
                .unwrap_or(DEFAULT_ESTIMATE_MINUTES);
            let bucket = pick_bucket(&loads, duration, daily_capacity, today_offset);
            loads[bucket] += duration;
            assigned.insert(idx, self.calendar.add_days(opts.week_start, bucket as i64));
        }

        tasks
            .iter()
            .enumerate()
            .map(|(i, t)| match assigned.get(&i) {
                Some(&date) => {
                    let mut placed = t.clone();
                    placed.planned_date = Some(date);
                    placed.is_date_locked = false;
                    placed
                }
                None => t.clone(),
            })
            .collect()
    }
}

/// Earliest deadline first; deadline-free tasks sort after deadline-bearing
/// ones, with creation order as the tiebreak.
fn deadline_order(a: &Task, b: &Task) -> Ordering {
    match (a.deadline_at, b.deadline_at) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.created_at.cmp(&b.created_at)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    }
}

/// First bucket, probing from today's bucket and wrapping around the week,
/// that stays within the daily budget. When nothing fits, fall back to the
/// least-loaded bucket (lowest index wins ties). Capacity is a soft
/// preference: the fallback may push a day past it.
fn pick_bucket(loads: &[i32; DAYS_IN_WEEK], duration: i32, daily_capacity: i32, today_offset: i64) -> usize {
    for k in 0..DAYS_IN_WEEK as i64 {
        let idx = (today_offset + k).rem_euclid(DAYS_IN_WEEK as i64) as usize;
        if loads[idx] + duration <= daily_capacity {
            return idx;
        }
    }

    let mut best = 0;
    for i in 1..DAYS_IN_WEEK {
        if loads[i] < loads[best] {
            best = i;
        }
    }
    best
}
