//! CLI commands for weekly goal tracking.

pub mod classify;
pub mod progress;
pub mod week;

pub use classify::{run_classify, ClassifyArgs};
pub use progress::{run_progress, ProgressArgs};
pub use week::{run_week, WeekArgs};

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone};

/// Parses a reference instant from RFC 3339 (`2026-10-14T15:00:00+07:00`) or
/// a bare date (`2026-10-14`, taken at local noon). `None` means now.
///
/// # Errors
/// Returns an error if the value is neither format.
pub fn parse_reference(value: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let Some(value) = value else {
        return Ok(Local::now().fixed_offset());
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant);
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        anyhow!("Invalid date '{}': expected RFC 3339 or YYYY-MM-DD", value)
    })?;
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));

    Local
        .from_local_datetime(&noon)
        .earliest()
        .map(|instant| instant.fixed_offset())
        .ok_or_else(|| anyhow!("Date '{}' has no valid local noon", value))
}
