//! ~/.tired/config.toml — planning defaults. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_tired_home;
use tired_core::DEFAULT_WEEKLY_CAPACITY_MINUTES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub planning: PlanningSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSection {
    /// Minutes budgeted across the planning week.
    pub weekly_capacity_minutes: i32,
    /// IANA timezone for deadline entry (e.g. "Europe/Berlin").
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planning: PlanningSection {
                weekly_capacity_minutes: DEFAULT_WEEKLY_CAPACITY_MINUTES,
                timezone: "UTC".to_string(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tired_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
