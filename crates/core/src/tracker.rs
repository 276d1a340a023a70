//! Weekly goal tracking: ties the week window, classifier and progress
//! formulas together.
//!
//! [`GoalTracker::compute`] is a pure function of its inputs. Callers that
//! render on every state change may cache the result keyed on the inputs.

use crate::classifier::{GoalClassifier, GoalFamily};
use crate::config::{FallbackTargets, Locale, TrackerConfig};
use crate::defaults::default_goal_progress;
use crate::goals::{WeeklyGoal, WeeklyGoals};
use crate::progress::{measure, GoalProgress};
use crate::trade::Trade;
use crate::week::WeekWindow;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const PRIMARY_GOAL_ID: &str = "primary_goal";
pub const SECONDARY_GOAL_ID: &str = "secondary_goal";

/// Progress for the week, either for the coach's two goals or for the three
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", content = "goals", rename_all = "snake_case")]
pub enum GoalProgressSet {
    Explicit([GoalProgress; 2]),
    Defaults([GoalProgress; 3]),
}

impl GoalProgressSet {
    #[must_use]
    pub fn as_slice(&self) -> &[GoalProgress] {
        match self {
            Self::Explicit(goals) => goals,
            Self::Defaults(goals) => goals,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<GoalProgress> {
        match self {
            Self::Explicit(goals) => goals.into(),
            Self::Defaults(goals) => goals.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always false; kept for slice-like ergonomics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[must_use]
    pub const fn is_defaults(&self) -> bool {
        matches!(self, Self::Defaults(_))
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_progress(self.as_slice())
    }
}

/// Roll-up shown in the goal tracker header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// Rounded mean of the goals' percentages.
    pub overall_percentage: f64,
    pub all_completed: bool,
}

impl ProgressSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_progress(progress: &[GoalProgress]) -> Self {
        let total = progress.len();
        let completed = progress.iter().filter(|p| p.status.is_done()).count();
        let overall_percentage = if total == 0 {
            0.0
        } else {
            (progress.iter().map(|p| p.percentage).sum::<f64>() / total as f64).round()
        };

        Self {
            completed,
            total,
            overall_percentage,
            all_completed: total > 0 && completed == total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoalTracker {
    classifier: GoalClassifier,
    fallback_targets: FallbackTargets,
    locale: Locale,
}

impl GoalTracker {
    #[must_use]
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            classifier: GoalClassifier::new(&config.keywords),
            fallback_targets: config.fallback_targets.clone(),
            locale: config.locale,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn classify(&self, goal: &WeeklyGoal) -> GoalFamily {
        self.classifier.classify(goal.classification_text())
    }

    /// Computes progress for the week containing `now`.
    ///
    /// `checkin_count` is the running total of completed check-ins and is
    /// not scoped to the week. Goals are used only when both the primary and
    /// the secondary goal are present; otherwise the defaults are tracked.
    #[must_use]
    pub fn compute<Tz: TimeZone>(
        &self,
        goals: Option<&WeeklyGoals>,
        trades: &[Trade],
        checkin_count: u32,
        now: &DateTime<Tz>,
    ) -> GoalProgressSet {
        let window = WeekWindow::containing(now);
        let week_trades = window.filter(trades);
        debug!(
            "Week starting {} has {} of {} trades",
            window.start(),
            week_trades.len(),
            trades.len()
        );

        match goals.map(WeeklyGoals::pair) {
            Some(Some((primary, secondary))) => GoalProgressSet::Explicit([
                self.goal_progress(primary, PRIMARY_GOAL_ID, &week_trades, checkin_count),
                self.goal_progress(secondary, SECONDARY_GOAL_ID, &week_trades, checkin_count),
            ]),
            Some(None) => {
                warn!("Weekly goals are incomplete, tracking default goals instead");
                GoalProgressSet::Defaults(self.defaults(&week_trades, checkin_count))
            }
            None => GoalProgressSet::Defaults(self.defaults(&week_trades, checkin_count)),
        }
    }

    /// [`Self::compute`] against the local clock.
    #[must_use]
    pub fn compute_now(
        &self,
        goals: Option<&WeeklyGoals>,
        trades: &[Trade],
        checkin_count: u32,
    ) -> GoalProgressSet {
        self.compute(goals, trades, checkin_count, &Local::now())
    }

    /// Progress of a single explicit goal against already week-scoped trades.
    #[must_use]
    pub fn goal_progress(
        &self,
        goal: &WeeklyGoal,
        fallback_id: &str,
        week_trades: &[&Trade],
        checkin_count: u32,
    ) -> GoalProgress {
        let family = self.classify(goal);
        let goal_id = goal.id_or(fallback_id);
        debug!("Goal {} classified as {}", goal_id, family);

        let measurement = measure(
            family,
            goal.declared_target(),
            &self.fallback_targets,
            week_trades,
            checkin_count,
        );

        GoalProgress::new(goal_id, goal.title.clone(), measurement)
    }

    fn defaults(&self, week_trades: &[&Trade], checkin_count: u32) -> [GoalProgress; 3] {
        default_goal_progress(week_trades, checkin_count, self.locale)
    }
}

impl Default for GoalTracker {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GoalTarget;
    use crate::progress::GoalStatus;
    use crate::trade::TradeStatus;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        "2026-10-14T15:00:00Z".parse().unwrap()
    }

    fn trade(id: i64, ts: &str, status: TradeStatus) -> Trade {
        Trade::new(id, ts.parse().unwrap(), status)
    }

    fn goals(primary: WeeklyGoal, secondary: WeeklyGoal) -> WeeklyGoals {
        WeeklyGoals::new(primary, secondary)
    }

    #[test]
    fn explicit_goals_keep_order_and_fallback_ids() {
        let goals = goals(
            WeeklyGoal::new("Morning routine", "check-in every day"),
            WeeklyGoal::new("Patience", "wait for A+ setups").with_id("g-2"),
        );

        let set = GoalTracker::default().compute(Some(&goals), &[], 2, &now());
        let GoalProgressSet::Explicit([primary, secondary]) = set else {
            panic!("expected explicit goals");
        };

        assert_eq!(primary.goal_id, "primary_goal");
        assert_eq!(primary.title, "Morning routine");
        assert_eq!(primary.current, 2.0);
        assert_eq!(primary.target, 7.0);
        assert_eq!(secondary.goal_id, "g-2");
        assert_eq!(secondary.icon, "🎯");
        assert_eq!(secondary.status, GoalStatus::NotStarted);
    }

    #[test]
    fn missing_goals_use_defaults() {
        let set = GoalTracker::default().compute(None, &[], 0, &now());
        assert!(set.is_defaults());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn incomplete_pair_uses_defaults() {
        let mut goals = goals(WeeklyGoal::new("a", "stop loss"), WeeklyGoal::new("b", ""));
        goals.secondary_goal = None;

        let set = GoalTracker::default().compute(Some(&goals), &[], 0, &now());
        assert!(set.is_defaults());

        goals.secondary_goal = goals.primary_goal.take();
        let set = GoalTracker::default().compute(Some(&goals), &[], 0, &now());
        assert!(set.is_defaults());
    }

    #[test]
    fn only_week_trades_are_counted() {
        let trades = vec![
            trade(1, "2026-10-13T09:00:00Z", TradeStatus::Closed),
            trade(2, "2026-10-09T09:00:00Z", TradeStatus::Closed),
            trade(3, "2026-10-12T00:00:00Z", TradeStatus::Closed),
        ];
        let goals = goals(
            WeeklyGoal::new("Trades", "close 3 trades").with_target(GoalTarget::Number(3.0)),
            WeeklyGoal::new("Calm", ""),
        );

        let set = GoalTracker::default().compute(Some(&goals), &trades, 0, &now());
        let trade_goal = &set.as_slice()[0];
        assert_eq!(trade_goal.current, 2.0);
        assert_eq!(trade_goal.percentage, 67.0);
        assert_eq!(trade_goal.status, GoalStatus::InProgress);
    }

    #[test]
    fn configured_fallbacks_and_locale_apply() {
        let config = TrackerConfig {
            locale: Locale::En,
            fallback_targets: FallbackTargets {
                trade_count: 2.0,
                ..FallbackTargets::default()
            },
            ..TrackerConfig::default()
        };
        let tracker = GoalTracker::new(&config);
        let trades = vec![trade(1, "2026-10-13T09:00:00Z", TradeStatus::Closed)];

        let goals = goals(WeeklyGoal::new("x", "trade less"), WeeklyGoal::new("y", ""));
        let set = tracker.compute(Some(&goals), &trades, 0, &now());
        assert_eq!(set.as_slice()[0].target, 2.0);
        assert_eq!(set.as_slice()[0].percentage, 50.0);

        let set = tracker.compute(None, &trades, 0, &now());
        assert_eq!(set.as_slice()[0].title, "Stop-Loss Compliance");
    }

    #[test]
    fn summary_rolls_up_percentages() {
        let trades = vec![
            trade(1, "2026-10-13T09:00:00Z", TradeStatus::Closed).with_stop_loss(dec!(10)),
            trade(2, "2026-10-13T10:00:00Z", TradeStatus::Closed).with_pnl(dec!(1)),
        ];

        let set = GoalTracker::default().compute(None, &trades, 7, &now());
        let summary = set.summary();

        // 50% stop-loss, 100% check-ins, 50% analysis
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.overall_percentage, 67.0);
        assert!(!summary.all_completed);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = ProgressSummary::from_progress(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.overall_percentage, 0.0);
        assert!(!summary.all_completed);
    }

    #[test]
    fn set_serializes_with_source_tag() {
        let set = GoalTracker::default().compute(None, &[], 0, &now());
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["source"], "defaults");
        assert_eq!(json["goals"].as_array().map(Vec::len), Some(3));
    }
}
