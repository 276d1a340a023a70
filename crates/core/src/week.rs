//! Monday-aligned week windows and the trade filter built on them.

use crate::trade::Trade;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// Returns the most recent Monday at 00:00:00 in the reference's time zone.
///
/// Sunday belongs to the week that started six days earlier. If local
/// midnight is ambiguous the earliest instant wins; if it falls in a DST gap
/// the first valid instant after it is used.
#[must_use]
pub fn start_of_week<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Tz> {
    let local = reference.naive_local().date();
    let days_since_monday = i64::from(local.weekday().num_days_from_monday());
    let monday = local - Duration::days(days_since_monday);

    local_midnight(&reference.timezone(), monday)
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            // DST transitions shift by at most an hour in practice.
            (1..=4)
                .map(|step| midnight + Duration::minutes(30 * step))
                .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Trades timestamped at or after `week_start`, in input order.
///
/// There is no upper bound: a trade dated after the reference instant still
/// belongs to "this week".
pub fn trades_since<'a, Tz: TimeZone>(
    trades: &'a [Trade],
    week_start: &DateTime<Tz>,
) -> Vec<&'a Trade> {
    trades
        .iter()
        .filter(|trade| trade.timestamp >= *week_start)
        .collect()
}

/// The current week, anchored at its Monday midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: DateTime<FixedOffset>,
}

impl WeekWindow {
    #[must_use]
    pub fn containing<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        Self {
            start: start_of_week(reference).fixed_offset(),
        }
    }

    /// Week start with the UTC offset of the reference it was computed from.
    #[must_use]
    pub const fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    #[must_use]
    pub fn contains(&self, trade: &Trade) -> bool {
        trade.timestamp >= self.start
    }

    #[must_use]
    pub fn filter<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        trades_since(trades, &self.start)
    }
}
