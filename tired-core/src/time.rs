//! Time utilities: timezone-correct deadline entry.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

fn local_to_utc(ndt: NaiveDateTime, tz_name: &str) -> Result<DateTime<Utc>> {
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| anyhow!("invalid timezone: {tz_name}"))?;

    tz.from_local_datetime(&ndt)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("ambiguous or invalid local time (DST?): {ndt} {tz_name}"))
}

/// Parse a deadline like "2026-03-06 17:00" in an IANA tz, returning UTC.
pub fn parse_local_deadline_to_utc(local: &str, tz_name: &str) -> Result<DateTime<Utc>> {
    let ndt = NaiveDateTime::parse_from_str(local, "%Y-%m-%d %H:%M")
        .map_err(|e| anyhow!("invalid local datetime '{local}': {e}"))?;
    local_to_utc(ndt, tz_name)
}

/// 23:59 local on `date`, for deadlines given as a bare day.
pub fn local_end_of_day_to_utc(date: NaiveDate, tz_name: &str) -> Result<DateTime<Utc>> {
    let ndt = date
        .and_hms_opt(23, 59, 0)
        .ok_or_else(|| anyhow!("invalid date: {date}"))?;
    local_to_utc(ndt, tz_name)
}
