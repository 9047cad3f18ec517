use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use holomente::cli;
use holomente::config::HoloConfig;
use holomente::server;

#[derive(Parser)]
#[command(
    name = "holomente",
    version,
    about = "REST backend for the HoloMundo memory journal and its digital companions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Insert the built-in companion personas
    Seed,
    /// Show journal and companion statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HoloConfig::load()?;

    // Logs go to stderr with the configured default filter
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => server::serve(config).await?,
        Command::Seed => cli::seed::seed(&config)?,
        Command::Stats => cli::stats::stats(&config)?,
    }

    Ok(())
}
