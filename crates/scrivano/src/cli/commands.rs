//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Streaming completion relay for CMS editing surfaces.
#[derive(Debug, Parser)]
#[command(name = "scrivano", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the relay server
    Serve {
        /// Host to bind, overriding RELAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding RELAY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}
