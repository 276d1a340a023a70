//! Classify CLI command: shows which metric family a goal text maps to.

use anyhow::{Context, Result};
use clap::Args;
use trade_coach_core::{ConfigLoader, GoalClassifier};

/// Arguments for the classify command.
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Goal description to classify
    pub text: String,

    /// Config TOML file (for custom keywords)
    #[arg(short, long, default_value = "config/Coach.toml", env = "TRADE_COACH_CONFIG")]
    pub config: String,
}

/// Runs the classify command.
///
/// # Errors
/// Returns an error if the config cannot be loaded.
pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    let family = GoalClassifier::new(&config.keywords).classify(Some(&args.text));
    println!("{} {}", family.icon(), family);

    Ok(())
}
