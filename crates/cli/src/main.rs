use clap::{Parser, Subcommand};

mod commands;

use commands::{ClassifyArgs, ProgressArgs, WeekArgs};

#[derive(Parser)]
#[command(name = "trade-coach")]
#[command(about = "Weekly goal progress for the trading journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute this week's goal progress from a journal snapshot
    Progress(ProgressArgs),
    /// Show which metric family a goal description maps to
    Classify(ClassifyArgs),
    /// Print the start of the week containing a date
    Week(WeekArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Progress(args) => commands::run_progress(args)?,
        Commands::Classify(args) => commands::run_classify(args)?,
        Commands::Week(args) => commands::run_week(args)?,
    }

    Ok(())
}
