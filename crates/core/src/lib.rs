pub mod classifier;
pub mod config;
pub mod config_loader;
pub mod defaults;
pub mod goals;
pub mod progress;
pub mod report;
pub mod snapshot;
pub mod tracker;
pub mod trade;
pub mod week;

pub use classifier::{classify, GoalClassifier, GoalFamily};
pub use config::{FallbackTargets, KeywordConfig, Locale, TrackerConfig};
pub use config_loader::ConfigLoader;
pub use defaults::{default_goal_progress, DefaultGoal};
pub use goals::{GoalTarget, UserLevel, WeeklyGoal, WeeklyGoals};
pub use progress::{GoalProgress, GoalStatus, Measurement};
pub use report::ProgressFormatter;
pub use snapshot::{ProgressSnapshot, SnapshotError};
pub use tracker::{GoalProgressSet, GoalTracker, ProgressSummary};
pub use trade::{Trade, TradeStatus};
pub use week::{start_of_week, trades_since, WeekWindow};
