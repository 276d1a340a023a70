use crate::classifier::GoalFamily;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub locale: Locale,
    pub fallback_targets: FallbackTargets,
    pub keywords: KeywordConfig,
}

/// Language used for the titles of the default goals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

/// Targets for explicit goals that declare none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FallbackTargets {
    pub checkin: f64,
    pub trade_count: f64,
    pub generic: f64,
}

impl FallbackTargets {
    /// Stop-loss goals always target full compliance and have no fallback.
    #[must_use]
    pub const fn for_family(&self, family: GoalFamily) -> Option<f64> {
        match family {
            GoalFamily::StopLoss => None,
            GoalFamily::Checkin => Some(self.checkin),
            GoalFamily::TradeCount => Some(self.trade_count),
            GoalFamily::Generic => Some(self.generic),
        }
    }
}

impl Default for FallbackTargets {
    fn default() -> Self {
        Self {
            checkin: 7.0,
            trade_count: 5.0,
            generic: 100.0,
        }
    }
}

/// Substrings that route goal text to a family.
///
/// Matching is case-insensitive; families are tried in a fixed order
/// (stop-loss, check-in, trade count) regardless of list contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeywordConfig {
    pub stop_loss: Vec<String>,
    pub checkin: Vec<String>,
    pub trade_count: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stop_loss: vec!["stop".to_string(), "sl".to_string()],
            checkin: vec!["check".to_string(), "ritual".to_string()],
            trade_count: vec!["trade".to_string(), "lệnh".to_string()],
        }
    }
}
