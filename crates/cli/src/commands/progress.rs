//! Progress CLI command.
//!
//! Loads a journal snapshot and prints this week's goal progress, either as
//! the text report or as the JSON list the dashboard consumes.

use super::parse_reference;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use trade_coach_core::{
    ConfigLoader, GoalTracker, Locale, ProgressFormatter, ProgressSnapshot, WeekWindow,
};

/// Locale choices for `--locale`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    Vi,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Vi => Self::Vi,
            LocaleArg::En => Self::En,
        }
    }
}

/// Arguments for the progress command.
#[derive(Args, Debug, Clone)]
pub struct ProgressArgs {
    /// Snapshot JSON file with `goals`, `trades` and `checkinCount`
    #[arg(short, long)]
    pub snapshot: String,

    /// Reference instant (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub now: Option<String>,

    /// Config TOML file
    #[arg(short, long, default_value = "config/Coach.toml", env = "TRADE_COACH_CONFIG")]
    pub config: String,

    /// Language for default goal titles (overrides config)
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Print the goal list as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Runs the progress command.
///
/// # Errors
/// Returns an error if the config or snapshot cannot be loaded, or `--now`
/// cannot be parsed.
pub fn run_progress(args: ProgressArgs) -> Result<()> {
    let mut config = ConfigLoader::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;
    if let Some(locale) = args.locale {
        config.locale = locale.into();
    }

    let snapshot = ProgressSnapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot))?;
    let now = parse_reference(args.now.as_deref())?;

    let tracker = GoalTracker::new(&config);
    let set = tracker.compute(
        snapshot.goals.as_ref(),
        &snapshot.trades,
        snapshot.checkin_count,
        &now,
    );

    let summary = set.summary();
    tracing::info!(
        "Computed {} goals, {}/{} completed, overall {}%",
        set.len(),
        summary.completed,
        summary.total,
        summary.overall_percentage
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(set.as_slice())?);
    } else {
        print!("{}", ProgressFormatter::format(&set, &WeekWindow::containing(&now)));
    }

    Ok(())
}
