//! Entry point for the scrivano binary.

use clap::Parser;
use scrivano::cli::{Cli, Commands, handle_serve_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Environment variables from .env take effect before config is read.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => handle_serve_command(host, port).await?,
    }

    Ok(())
}
