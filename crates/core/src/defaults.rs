//! Goals tracked when the coach has not set any for the week.

use crate::config::Locale;
use crate::progress::{
    checkin_cadence, post_trade_analysis_rate, stop_loss_compliance, GoalProgress,
};
use crate::trade::Trade;

/// Check-in target of the default daily check-in goal.
pub const DEFAULT_CHECKIN_TARGET: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultGoal {
    SlCompliance,
    DailyCheckins,
    PostTradeAnalysis,
}

impl DefaultGoal {
    pub const ALL: [Self; 3] = [
        Self::SlCompliance,
        Self::DailyCheckins,
        Self::PostTradeAnalysis,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SlCompliance => "sl_compliance",
            Self::DailyCheckins => "daily_checkins",
            Self::PostTradeAnalysis => "post_trade_analysis",
        }
    }

    #[must_use]
    pub const fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::SlCompliance, Locale::Vi) => "Tuân thủ Stop-Loss",
            (Self::SlCompliance, Locale::En) => "Stop-Loss Compliance",
            (Self::DailyCheckins, Locale::Vi) => "Check-in hàng ngày",
            (Self::DailyCheckins, Locale::En) => "Daily Check-ins",
            (Self::PostTradeAnalysis, Locale::Vi) => "Phân tích sau lệnh",
            (Self::PostTradeAnalysis, Locale::En) => "Post-Trade Analysis",
        }
    }

    #[must_use]
    pub fn progress(
        self,
        week_trades: &[&Trade],
        checkin_count: u32,
        locale: Locale,
    ) -> GoalProgress {
        let measurement = match self {
            Self::SlCompliance => stop_loss_compliance(week_trades),
            Self::DailyCheckins => checkin_cadence(checkin_count, DEFAULT_CHECKIN_TARGET),
            Self::PostTradeAnalysis => post_trade_analysis_rate(week_trades),
        };

        GoalProgress::new(self.id(), self.title(locale), measurement)
    }
}

/// The three default goals, in display order.
#[must_use]
pub fn default_goal_progress(
    week_trades: &[&Trade],
    checkin_count: u32,
    locale: Locale,
) -> [GoalProgress; 3] {
    DefaultGoal::ALL.map(|goal| goal.progress(week_trades, checkin_count, locale))
}
