use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tired_core::{
    is_overloaded, local_end_of_day_to_utc, parse_local_deadline_to_utc, week_start_of,
    weekly_load, AutoPlanOptions, WeekPlanner,
};

mod config;
mod import;
mod state;

#[derive(Parser, Debug)]
#[command(name = "tired", version, about = "Tired weekly task planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default ~/.tired/config.toml
    Init,

    /// Add a task to the store
    Add {
        #[arg(long)]
        title: String,

        /// Estimated minutes (absent: planner assumes 60)
        #[arg(long)]
        estimate: Option<i32>,

        /// Deadline as local "YYYY-MM-DD HH:MM" in the configured timezone
        #[arg(long)]
        deadline: Option<String>,

        /// Deadline as a bare day (23:59 local)
        #[arg(long, conflicts_with = "deadline")]
        due_date: Option<NaiveDate>,

        /// Pre-assign a planned date
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Pin the planned date against auto-planning
        #[arg(long, requires = "date")]
        lock: bool,
    },

    /// Mark a task as done
    Done { id: String },

    /// Auto-plan unscheduled tasks into a week
    PlanWeek {
        /// First day of the week (default: Monday of the current week)
        #[arg(long)]
        week_start: Option<NaiveDate>,

        /// Override the configured weekly minute budget
        #[arg(long)]
        weekly_minutes: Option<i32>,

        /// Persist the assignments (default: dry run)
        #[arg(long)]
        apply: bool,
    },

    /// Show per-day load for a week
    Load {
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },

    /// Import tasks from a CSV file
    Import { csv: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init => config::init_config(),
        Command::Add {
            title,
            estimate,
            deadline,
            due_date,
            date,
            lock,
        } => add_task(title, estimate, deadline, due_date, date, lock),
        Command::Done { id } => mark_done(&id),
        Command::PlanWeek {
            week_start,
            weekly_minutes,
            apply,
        } => plan_week(week_start, weekly_minutes, apply),
        Command::Load { week_start } => show_load(week_start),
        Command::Import { csv } => import_tasks(&csv),
    }
}

fn add_task(
    title: String,
    estimate: Option<i32>,
    deadline: Option<String>,
    due_date: Option<NaiveDate>,
    date: Option<NaiveDate>,
    lock: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let now = Utc::now();

    let mut tasks = state::load_tasks()?;
    let mut task = tired_core::Task::new(state::next_task_id(&tasks, now), title, now);

    if let Some(minutes) = estimate {
        task = task.with_estimate(minutes);
    }
    if let Some(local) = deadline {
        task = task.with_deadline(
            parse_local_deadline_to_utc(&local, &cfg.planning.timezone)
                .context("parse --deadline")?,
        );
    } else if let Some(day) = due_date {
        task = task.with_deadline(local_end_of_day_to_utc(day, &cfg.planning.timezone)?);
    }
    if let Some(d) = date {
        task = task.with_planned_date(d);
        if lock {
            task = task.locked();
        }
    }

    println!("Added {} — {}", task.id, task.title);
    tasks.push(task);
    state::save_tasks(&tasks)
}

fn mark_done(id: &str) -> Result<()> {
    let mut tasks = state::load_tasks()?;
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        bail!("no task with id {id} (see ~/.tired/tasks.json)");
    };
    if task.is_done {
        println!("{id} was already done");
        return Ok(());
    }
    task.is_done = true;
    println!("Done: {} — {}", task.id, task.title);
    state::save_tasks(&tasks)
}

fn plan_week(
    week_start: Option<NaiveDate>,
    weekly_minutes: Option<i32>,
    apply: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let now = Utc::now();

    let week_start = week_start.unwrap_or_else(|| week_start_of(now.date_naive()));
    let opts = AutoPlanOptions::for_week(week_start).with_weekly_capacity(
        weekly_minutes.unwrap_or(cfg.planning.weekly_capacity_minutes),
    );

    let tasks = state::load_tasks()?;
    let planned = WeekPlanner::civil().plan_week(&tasks, &opts, now);

    println!(
        "# Week of {} ({} min/week, {} min/day)\n",
        opts.week_start,
        opts.weekly_capacity_minutes,
        opts.daily_capacity_minutes()
    );

    let mut moved = 0;
    for (before, after) in tasks.iter().zip(&planned) {
        if before.planned_date != after.planned_date {
            let date = after.planned_date.context("planner always assigns a date")?;
            println!(
                "  {} -> {} | {} ({} min)",
                after.id,
                date,
                after.title,
                after.estimated_minutes.unwrap_or(60)
            );
            moved += 1;
        }
    }
    if moved == 0 {
        println!("  (nothing to plan)");
    }

    print_week_table(&planned, &opts);

    if apply {
        state::save_tasks(&planned)?;
        println!("\nSaved {moved} assignment(s).");
    } else if moved > 0 {
        println!("\nDry run; re-run with --apply to save.");
    }

    Ok(())
}

fn show_load(week_start: Option<NaiveDate>) -> Result<()> {
    let cfg = config::load_config()?;
    let now = Utc::now();

    let week_start = week_start.unwrap_or_else(|| week_start_of(now.date_naive()));
    let opts = AutoPlanOptions::for_week(week_start)
        .with_weekly_capacity(cfg.planning.weekly_capacity_minutes);

    let tasks = state::load_tasks()?;
    println!(
        "# Load, week of {} (budget {} min/day)\n",
        week_start,
        opts.daily_capacity_minutes()
    );
    print_week_table(&tasks, &opts);
    Ok(())
}

fn print_week_table(tasks: &[tired_core::Task], opts: &AutoPlanOptions) {
    let load = weekly_load(tasks, opts.week_start);
    println!("\n  day              minutes");
    for (i, minutes) in load.iter().enumerate() {
        let day = opts.week_start + chrono::Duration::days(i as i64);
        let flag = if is_overloaded(tasks, day, opts.daily_capacity_minutes()) {
            "  OVERLOADED"
        } else {
            ""
        };
        println!("  {} {:>10}{}", day.format("%a %Y-%m-%d"), minutes, flag);
    }
}

fn import_tasks(csv: &PathBuf) -> Result<()> {
    if !csv.exists() {
        bail!("CSV not found: {}", csv.display());
    }
    let cfg = config::load_config()?;
    let now = Utc::now();

    let mut tasks = state::load_tasks()?;
    let added = import::import_csv(csv, &cfg.planning.timezone, now, &mut tasks)?;
    state::save_tasks(&tasks)?;

    println!("Imported {} task(s) from {}", added, csv.display());
    println!("Next: `tired plan-week` to schedule them.");
    Ok(())
}
