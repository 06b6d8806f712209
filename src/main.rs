use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use spending_tracker::config::{logging, paths::TrackerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "spending",
    version,
    about = "Terminal spending tracker",
    long_about = "Log spending from cash, bank and savings in a terminal UI and \
                  see balances, amount histograms and a daily trend as you go. \
                  Nothing is saved; each run starts with an empty ledger."
)]
struct Cli {
    /// Override the page title
    #[arg(long, global = true, value_name = "TEXT")]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;

    // Without a log file the app still runs, just silently
    let _ = logging::init_logging(&paths);

    let mut settings = Settings::load_or_default(&paths)?;
    if let Some(title) = cli.title {
        settings.title = title;
    }

    match cli.command {
        Some(Commands::Tui) | None => {
            info!(base_dir = %paths.base_dir().display(), "starting tui");
            spending_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Config) => print_config(&paths, &settings),
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Spending Tracker Configuration");
    println!("==============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Title:           {}", settings.title);
    println!("  Currency suffix: {}", settings.currency_suffix);
    println!("  Histogram bins:  {}", settings.histogram_bins);
    println!("  Capital step:    {}", settings.capital_step);
    println!("  Amount step:     {}", settings.amount_step);
    println!("  Tick rate:       {} ms", settings.tick_rate_ms);
}
