//! Keyword classification of free-text goals.
//!
//! Goal descriptions are written by the coaching AI, so they cannot be parsed
//! into structured metrics. A goal is routed to a metric family by sniffing
//! for a handful of keywords; anything unrecognised is a generic discipline
//! goal that is never measured.

use crate::config::KeywordConfig;
use serde::{Deserialize, Serialize};

/// Metric family a goal is measured with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalFamily {
    /// Share of this week's trades placed with a stop-loss.
    StopLoss,
    /// Completed daily check-ins.
    Checkin,
    /// Trades closed this week.
    TradeCount,
    /// Discipline goal with no measurable signal.
    Generic,
}

impl GoalFamily {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::StopLoss => "🛡️",
            Self::Checkin => "🌅",
            Self::TradeCount => "📊",
            Self::Generic => "🎯",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StopLoss => "stop_loss",
            Self::Checkin => "checkin",
            Self::TradeCount => "trade_count",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for GoalFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct GoalClassifier {
    stop_loss: Vec<String>,
    checkin: Vec<String>,
    trade_count: Vec<String>,
}

impl GoalClassifier {
    #[must_use]
    pub fn new(keywords: &KeywordConfig) -> Self {
        Self {
            stop_loss: lowercase_all(&keywords.stop_loss),
            checkin: lowercase_all(&keywords.checkin),
            trade_count: lowercase_all(&keywords.trade_count),
        }
    }

    /// Classifies goal text; first matching family wins.
    #[must_use]
    pub fn classify(&self, text: Option<&str>) -> GoalFamily {
        let text = text.unwrap_or_default().to_lowercase();

        [
            (GoalFamily::StopLoss, &self.stop_loss),
            (GoalFamily::Checkin, &self.checkin),
            (GoalFamily::TradeCount, &self.trade_count),
        ]
        .into_iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
        .map_or(GoalFamily::Generic, |(family, _)| family)
    }
}

impl Default for GoalClassifier {
    fn default() -> Self {
        Self::new(&KeywordConfig::default())
    }
}

fn lowercase_all(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Classifies with the built-in keyword lists.
#[must_use]
pub fn classify(text: Option<&str>) -> GoalFamily {
    GoalClassifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_loss_keywords() {
        assert_eq!(classify(Some("Luôn đặt stop loss")), GoalFamily::StopLoss);
        assert_eq!(classify(Some("100% lệnh có SL")), GoalFamily::StopLoss);
        assert_eq!(classify(Some("STOP revenge trading")), GoalFamily::StopLoss);
    }

    #[test]
    fn checkin_keywords() {
        assert_eq!(classify(Some("Daily check-in every morning")), GoalFamily::Checkin);
        assert_eq!(classify(Some("Morning ritual")), GoalFamily::Checkin);
    }

    #[test]
    fn trade_count_keywords() {
        assert_eq!(classify(Some("Close 5 trades")), GoalFamily::TradeCount);
        assert_eq!(classify(Some("đóng 5 lệnh")), GoalFamily::TradeCount);
        assert_eq!(classify(Some("ĐÓNG 5 LỆNH")), GoalFamily::TradeCount);
    }

    #[test]
    fn unmatched_text_is_generic() {
        assert_eq!(classify(Some("Giữ bình tĩnh")), GoalFamily::Generic);
        assert_eq!(classify(Some("")), GoalFamily::Generic);
        assert_eq!(classify(None), GoalFamily::Generic);
    }

    #[test]
    fn priority_order_is_fixed() {
        // Contains both "stop" and "trade"
        assert_eq!(classify(Some("Set a stop on every trade")), GoalFamily::StopLoss);
        // Contains both "check" and "trade"
        assert_eq!(classify(Some("Check before each trade")), GoalFamily::Checkin);
        // "sl" is a plain substring match, so "slow" is a stop-loss goal
        assert_eq!(classify(Some("Slow down, check in")), GoalFamily::StopLoss);
    }

    #[test]
    fn custom_keywords_keep_priority() {
        let keywords = KeywordConfig {
            stop_loss: vec!["Cắt lỗ".to_string()],
            checkin: vec!["  ".to_string(), "nhật ký".to_string()],
            trade_count: vec!["trade".to_string()],
        };
        let classifier = GoalClassifier::new(&keywords);

        assert_eq!(classifier.classify(Some("luôn CẮT LỖ mỗi trade")), GoalFamily::StopLoss);
        assert_eq!(classifier.classify(Some("viết nhật ký")), GoalFamily::Checkin);
        // Blank keywords are dropped rather than matching everything
        assert_eq!(classifier.classify(Some("giữ kỷ luật")), GoalFamily::Generic);
        // Defaults are replaced, not extended
        assert_eq!(classifier.classify(Some("stop loss")), GoalFamily::Generic);
    }

    #[test]
    fn icons_are_fixed_per_family() {
        assert_eq!(GoalFamily::StopLoss.icon(), "🛡️");
        assert_eq!(GoalFamily::Checkin.icon(), "🌅");
        assert_eq!(GoalFamily::TradeCount.icon(), "📊");
        assert_eq!(GoalFamily::Generic.icon(), "🎯");
    }
}
