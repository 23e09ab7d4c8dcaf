//! # dopc: Delivery Order Price Calculator
//!
//! Command line front end for pricing delivery orders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              dopc                                       │
//! │                                                                         │
//! │  main.rs ──────► tracing to stderr, clap parsing, dispatch             │
//! │                                                                         │
//! │  commands/ ────► quote (price one order), config (show settings)       │
//! │                                                                         │
//! │  render.rs ────► text breakdown                                        │
//! │                                                                         │
//! │  error.rs ─────► CliError: message, per-field lines, exit status       │
//! │                                                                         │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  dopc-venue (QuoteService, VenueApiConfig) ──► dopc-core (pricing)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Status
//! - 0: quote printed
//! - 1: configuration or internal failure
//! - 2: invalid input
//! - 3: venue data unavailable
//! - 4: address outside the delivery area

mod commands;
mod error;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::quote::QuoteArgs;

#[derive(Debug, Parser)]
#[command(name = "dopc")]
#[command(version, about = "Delivery order price calculator")]
struct Cli {
    /// Path to dopc.toml (defaults to the user config directory)
    #[arg(long, global = true, env = "DOPC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price one delivery order
    Quote(QuoteArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Quote(args) => commands::quote::run(args, cli.config).await,
        Commands::Config => commands::config::run(cli.config),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
