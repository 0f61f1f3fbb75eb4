//! CLI module for the API key registry

pub mod serve;

use clap::{Parser, Subcommand};

/// API Key Registry - issue, list, revoke and validate named API keys
#[derive(Parser)]
#[command(name = "api-key-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
