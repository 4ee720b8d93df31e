//! CSV task import.
//!
//! Expected header: `title,estimated_minutes,deadline,planned_date`.
//! `deadline` is local "YYYY-MM-DD HH:MM" in the configured timezone;
//! empty cells mean absent.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;

use tired_core::{parse_local_deadline_to_utc, Task};

use crate::state::next_task_id;

#[derive(Debug, Deserialize)]
struct CsvRow {
    title: String,
    estimated_minutes: Option<i32>,
    deadline: Option<String>,
    planned_date: Option<NaiveDate>,
}

/// Append tasks parsed from `path` to `tasks`. Returns how many were added.
pub fn import_csv(
    path: &Path,
    tz: &str,
    now: DateTime<Utc>,
    tasks: &mut Vec<Task>,
) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let mut added = 0;
    for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.with_context(|| format!("{}: row {}", path.display(), i + 1))?;
        if row.title.trim().is_empty() {
            continue;
        }

        let mut task = Task::new(next_task_id(tasks, now), row.title.trim(), now);
        if let Some(minutes) = row.estimated_minutes {
            task = task.with_estimate(minutes);
        }
        if let Some(local) = row.deadline.as_deref().filter(|s| !s.trim().is_empty()) {
            let deadline = parse_local_deadline_to_utc(local.trim(), tz)
                .with_context(|| format!("{}: row {} deadline", path.display(), i + 1))?;
            task = task.with_deadline(deadline);
        }
        if let Some(date) = row.planned_date {
            task = task.with_planned_date(date);
        }

        tasks.push(task);
        added += 1;
    }

    Ok(added)
}
