//! Task model shared by the planner, load reporting, and the CLI store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Core task type.
///
/// Note: we keep this small + serializable. Storage (the CLI's JSON file,
/// or a real backend) is a separate layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    pub is_done: bool,

    /// True pins the task to its current `planned_date`; auto-planning
    /// must not move it.
    pub is_date_locked: bool,

    /// Calendar day the task is scheduled on. Absent = unscheduled.
    pub planned_date: Option<NaiveDate>,

    /// Optional hard deadline (UTC). Absence sorts after presence.
    pub deadline_at: Option<DateTime<Utc>>,

    /// Minutes. Absent defaults to 60 at placement time and 0 in load sums.
    pub estimated_minutes: Option<i32>,

    /// Stable secondary sort key for deadline-free tasks.
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_done: false,
            is_date_locked: false,
            planned_date: None,
            deadline_at: None,
            estimated_minutes: None,
            created_at,
        }
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline_at = Some(deadline);
        self
    }

    pub fn with_estimate(mut self, minutes: i32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn with_planned_date(mut self, date: NaiveDate) -> Self {
        self.planned_date = Some(date);
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_date_locked = true;
        self
    }

    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }

    /// Only incomplete, unlocked, unscheduled tasks may be auto-planned.
    pub fn is_plan_candidate(&self) -> bool {
        !self.is_done && !self.is_date_locked && self.planned_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_candidacy_requires_all_three_conditions() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

        let open = Task::new("t1", "open", now);
        assert!(open.is_plan_candidate());

        assert!(!open.clone().done().is_plan_candidate());
        assert!(!open.clone().locked().is_plan_candidate());
        assert!(!open
            .with_planned_date(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap())
            .is_plan_candidate());
    }

    #[test]
    fn test_serde_round_trip_preserves_optionals() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let t = Task::new("t1", "write report", now)
            .with_estimate(45)
            .with_deadline(now + chrono::Duration::days(3));

        let json = serde_json::to_string(&t).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(back.planned_date.is_none());
    }
}
