use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a journaled trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

/// A trade as recorded by the journal.
///
/// Only the fields goal tracking reads are modelled; anything else the
/// journal stores alongside is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub asset: Option<String>,
    pub status: TradeStatus,
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
}

impl Trade {
    #[must_use]
    pub const fn new(id: i64, timestamp: DateTime<Utc>, status: TradeStatus) -> Self {
        Self {
            id,
            timestamp,
            asset: None,
            status,
            stop_loss: None,
            pnl: None,
        }
    }

    #[must_use]
    pub fn with_stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    #[must_use]
    pub fn with_pnl(mut self, pnl: Decimal) -> Self {
        self.pnl = Some(pnl);
        self
    }

    /// A zero stop-loss is what the entry form stores when the field is left
    /// blank, so it does not count as protection.
    #[must_use]
    pub fn has_stop_loss(&self) -> bool {
        self.stop_loss.is_some_and(|price| !price.is_zero())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    /// Whether a realized `PnL` was recorded. A zero `PnL` still counts.
    #[must_use]
    pub const fn has_pnl(&self) -> bool {
        self.pnl.is_some()
    }
}
