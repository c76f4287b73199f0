//! Termsheet CLI - extract covenant fields from offering documents.

use clap::Parser;
use termsheet_cli::{commands, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> termsheet_cli::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scrape(args) => commands::execute_scrape(args).await?,
        Command::Fields => commands::execute_fields(),
    }

    Ok(())
}
