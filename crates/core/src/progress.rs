//! Progress formulas for each goal family.
//!
//! Every formula guards its denominator, so an empty week or a goal without a
//! usable target still yields a fully populated [`Measurement`].

use crate::classifier::GoalFamily;
use crate::config::FallbackTargets;
use crate::trade::Trade;
use serde::{Deserialize, Serialize};

pub const POST_TRADE_ANALYSIS_ICON: &str = "🧠";
pub const FULL_COMPLIANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    /// Part of the published status set; no formula currently assigns it.
    Exceeded,
}

impl GoalStatus {
    /// `Completed` once `current` reaches `target`, `InProgress` for any
    /// positive progress, `NotStarted` otherwise.
    #[must_use]
    pub fn from_progress(current: f64, target: f64) -> Self {
        if current >= target {
            Self::Completed
        } else if current > 0.0 {
            Self::InProgress
        } else {
            Self::NotStarted
        }
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Completed | Self::Exceeded)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Exceeded => "exceeded",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured state of one goal, before it is given an id and title.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
    pub status: GoalStatus,
    pub icon: &'static str,
}

/// Progress of one goal as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
    pub status: GoalStatus,
    pub icon: String,
}

impl GoalProgress {
    #[must_use]
    pub fn new(
        goal_id: impl Into<String>,
        title: impl Into<String>,
        measurement: Measurement,
    ) -> Self {
        Self {
            goal_id: goal_id.into(),
            title: title.into(),
            current: measurement.current,
            target: measurement.target,
            percentage: measurement.percentage,
            status: measurement.status,
            icon: measurement.icon.to_string(),
        }
    }
}

/// Measures a classified goal against this week's trades.
///
/// `declared_target` is the goal's own target; families other than stop-loss
/// fall back to `fallbacks` when it is absent.
#[must_use]
pub fn measure(
    family: GoalFamily,
    declared_target: Option<f64>,
    fallbacks: &FallbackTargets,
    week_trades: &[&Trade],
    checkin_count: u32,
) -> Measurement {
    let target = declared_target
        .or_else(|| fallbacks.for_family(family))
        .filter(|t| t.is_finite() && *t > 0.0)
        .unwrap_or(FULL_COMPLIANCE);

    match family {
        GoalFamily::StopLoss => stop_loss_compliance(week_trades),
        GoalFamily::Checkin => checkin_cadence(checkin_count, target),
        GoalFamily::TradeCount => closed_trade_count(week_trades, target),
        GoalFamily::Generic => discipline(target),
    }
}

/// Percentage of trades carrying a stop-loss, target 100.
#[must_use]
pub fn stop_loss_compliance(week_trades: &[&Trade]) -> Measurement {
    let protected = week_trades.iter().filter(|t| t.has_stop_loss()).count();
    let rate = rate_percentage(protected, week_trades.len());

    Measurement {
        current: rate,
        target: FULL_COMPLIANCE,
        percentage: rate,
        status: GoalStatus::from_progress(rate, FULL_COMPLIANCE),
        icon: GoalFamily::StopLoss.icon(),
    }
}

/// Check-in count against `target`.
///
/// The count is the caller's running total, not scoped to the week.
#[must_use]
pub fn checkin_cadence(checkin_count: u32, target: f64) -> Measurement {
    count_measurement(f64::from(checkin_count), target, GoalFamily::Checkin)
}

/// Closed trades this week against `target`.
#[must_use]
pub fn closed_trade_count(week_trades: &[&Trade], target: f64) -> Measurement {
    let closed = week_trades.iter().filter(|t| t.is_closed()).count();
    count_measurement(closed as f64, target, GoalFamily::TradeCount)
}

/// Goals with no measurable signal never progress.
#[must_use]
pub fn discipline(target: f64) -> Measurement {
    Measurement {
        current: 0.0,
        target,
        percentage: 0.0,
        status: GoalStatus::NotStarted,
        icon: GoalFamily::Generic.icon(),
    }
}

/// Share of closed trades with a recorded `PnL`, target 100.
///
/// A recorded `PnL` stands in for "the trade was reviewed"; there is no
/// separate review flag on the journal entry.
#[must_use]
pub fn post_trade_analysis_rate(week_trades: &[&Trade]) -> Measurement {
    let closed = week_trades.iter().filter(|t| t.is_closed());
    let closed_count = closed.clone().count();
    let reviewed = closed.filter(|t| t.has_pnl()).count();
    let rate = rate_percentage(reviewed, closed_count);

    Measurement {
        current: rate,
        target: FULL_COMPLIANCE,
        percentage: rate,
        status: GoalStatus::from_progress(rate, FULL_COMPLIANCE),
        icon: POST_TRADE_ANALYSIS_ICON,
    }
}

fn count_measurement(current: f64, target: f64, family: GoalFamily) -> Measurement {
    Measurement {
        current,
        target,
        percentage: capped_percentage(current, target),
        status: GoalStatus::from_progress(current, target),
        icon: family.icon(),
    }
}

/// `part / whole` as a rounded percentage, 0 when `whole` is 0.
#[allow(clippy::cast_precision_loss)]
fn rate_percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).round()
}

/// Rounded percentage of `target`, clamped to `[0, 100]`.
fn capped_percentage(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).round().clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::TradeStatus;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ts() -> DateTime<Utc> {
        "2026-10-14T10:00:00Z".parse().unwrap()
    }

    fn closed() -> Trade {
        Trade::new(1, ts(), TradeStatus::Closed)
    }

    fn open() -> Trade {
        Trade::new(2, ts(), TradeStatus::Open)
    }

    #[test]
    fn status_rule() {
        assert_eq!(GoalStatus::from_progress(0.0, 7.0), GoalStatus::NotStarted);
        assert_eq!(GoalStatus::from_progress(3.0, 7.0), GoalStatus::InProgress);
        assert_eq!(GoalStatus::from_progress(7.0, 7.0), GoalStatus::Completed);
        assert_eq!(GoalStatus::from_progress(10.0, 7.0), GoalStatus::Completed);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::NotStarted).unwrap(),
            "\"not_started\""
        );
        assert_eq!(GoalStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn stop_loss_compliance_rounds() {
        let trades = [
            closed().with_stop_loss(dec!(100)),
            open().with_stop_loss(dec!(95.5)),
            closed(),
        ];
        let refs: Vec<&Trade> = trades.iter().collect();

        let m = stop_loss_compliance(&refs);
        assert_eq!(m.current, 67.0);
        assert_eq!(m.percentage, 67.0);
        assert_eq!(m.target, 100.0);
        assert_eq!(m.status, GoalStatus::InProgress);
        assert_eq!(m.icon, "🛡️");
    }

    #[test]
    fn stop_loss_compliance_without_trades_is_zero() {
        let m = stop_loss_compliance(&[]);
        assert_eq!(m.current, 0.0);
        assert_eq!(m.status, GoalStatus::NotStarted);
    }

    #[test]
    fn checkin_percentage_is_capped() {
        let m = checkin_cadence(10, 7.0);
        assert_eq!(m.current, 10.0);
        assert_eq!(m.percentage, 100.0);
        assert_eq!(m.status, GoalStatus::Completed);

        let m = checkin_cadence(3, 7.0);
        assert_eq!(m.percentage, 43.0);
        assert_eq!(m.status, GoalStatus::InProgress);
    }

    #[test]
    fn closed_trade_count_ignores_open_trades() {
        let trades = [closed(), open(), closed()];
        let refs: Vec<&Trade> = trades.iter().collect();

        let m = closed_trade_count(&refs, 5.0);
        assert_eq!(m.current, 2.0);
        assert_eq!(m.percentage, 40.0);
        assert_eq!(m.icon, "📊");
    }

    #[test]
    fn discipline_never_progresses() {
        let m = discipline(3.0);
        assert_eq!(m.current, 0.0);
        assert_eq!(m.target, 3.0);
        assert_eq!(m.percentage, 0.0);
        assert_eq!(m.status, GoalStatus::NotStarted);
    }

    #[test]
    fn post_trade_analysis_counts_closed_trades_with_pnl() {
        let trades = [
            closed().with_pnl(dec!(5)),
            closed().with_pnl(Decimal::ZERO),
            closed(),
            open().with_pnl(dec!(1)),
        ];
        let refs: Vec<&Trade> = trades.iter().collect();

        let m = post_trade_analysis_rate(&refs);
        assert_eq!(m.current, 67.0);
        assert_eq!(m.icon, "🧠");

        let only_open = [&trades[3]];
        assert_eq!(post_trade_analysis_rate(&only_open).current, 0.0);
    }

    #[test]
    fn measure_applies_fallback_targets() {
        let fallbacks = FallbackTargets::default();

        assert_eq!(measure(GoalFamily::Checkin, None, &fallbacks, &[], 0).target, 7.0);
        assert_eq!(measure(GoalFamily::TradeCount, None, &fallbacks, &[], 0).target, 5.0);
        assert_eq!(measure(GoalFamily::Generic, None, &fallbacks, &[], 0).target, 100.0);
        assert_eq!(
            measure(GoalFamily::Checkin, Some(3.0), &fallbacks, &[], 3).status,
            GoalStatus::Completed
        );
    }

    #[test]
    fn stop_loss_target_ignores_declared_target() {
        let m = measure(GoalFamily::StopLoss, Some(80.0), &FallbackTargets::default(), &[], 0);
        assert_eq!(m.target, 100.0);
    }

    #[test]
    fn non_positive_fallback_uses_full_compliance() {
        let fallbacks = FallbackTargets {
            checkin: 0.0,
            ..FallbackTargets::default()
        };
        let m = measure(GoalFamily::Checkin, None, &fallbacks, &[], 4);
        assert_eq!(m.target, 100.0);
        assert_eq!(m.percentage, 4.0);
    }

    #[test]
    fn goal_progress_serializes_camel_case() {
        let progress =
            GoalProgress::new("daily_checkins", "Daily Check-ins", checkin_cadence(3, 7.0));
        let json = serde_json::to_value(&progress).unwrap();

        assert_eq!(json["goalId"], "daily_checkins");
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["percentage"], 43.0);
        assert_eq!(json["icon"], "🌅");
    }
}
