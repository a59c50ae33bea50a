use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrina_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about = "A terminal workbench for scripted storefront page effects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Page markup file to load
        page: Option<PathBuf>,
    },
    /// Play a scenario against a page and report what happened
    Replay {
        /// Scenario file (TOML)
        scenario: PathBuf,
        /// Page markup file to load
        #[arg(short = 'p', long)]
        page: Option<PathBuf>,
        /// Pace steps against the wall clock instead of finishing instantly
        #[arg(long)]
        real_time: bool,
    },
    /// Show what the page enhancements wired up to
    Inspect {
        /// Page markup file to load
        page: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Handle commands
    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page).await,
        Some(Commands::Replay {
            scenario,
            page,
            real_time,
        }) => commands::replay::run(config, &scenario, page, real_time).await,
        Some(Commands::Inspect { page }) => commands::inspect::run(config, page),
        None => commands::run::run(config, None).await,
    }
}
