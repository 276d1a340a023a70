//! Week CLI command: prints the Monday that starts the week of a date.

use super::parse_reference;
use anyhow::Result;
use clap::Args;
use trade_coach_core::start_of_week;

/// Arguments for the week command.
#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Reference instant (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub date: Option<String>,
}

/// Runs the week command.
///
/// # Errors
/// Returns an error if `--date` cannot be parsed.
pub fn run_week(args: WeekArgs) -> Result<()> {
    let reference = parse_reference(args.date.as_deref())?;
    let start = start_of_week(&reference);

    println!("{}", start.to_rfc3339());

    Ok(())
}
