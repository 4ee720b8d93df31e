//! File-backed task store under ~/.tired/.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

use tired_core::Task;

pub fn tired_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tired"))
}

pub fn ensure_tired_home() -> Result<PathBuf> {
    let dir = tired_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn tasks_path() -> Result<PathBuf> {
    Ok(ensure_tired_home()?.join("tasks.json"))
}

pub fn load_tasks() -> Result<Vec<Task>> {
    let p = tasks_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_tasks(tasks: &[Task]) -> Result<()> {
    let p = tasks_path()?;
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Timestamp-based id, suffixed until unique within the store.
pub fn next_task_id(tasks: &[Task], now: DateTime<Utc>) -> String {
    let base = format!("t-{}", now.format("%Y%m%d%H%M%S"));
    if !tasks.iter().any(|t| t.id == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{base}-{n}");
        if !tasks.iter().any(|t| t.id == id) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_next_task_id_suffixes_on_collision() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let first = next_task_id(&[], now);
        assert_eq!(first, "t-20260302090000");

        let tasks = vec![Task::new(first.clone(), "x", now)];
        assert_eq!(next_task_id(&tasks, now), "t-20260302090000-2");
    }
}
