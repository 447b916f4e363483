//! Premia CLI - Command-line interface for the insurance charges predictor.
//!
//! This binary serves the local prediction form, runs one-off predictions
//! from the terminal, and writes the bundled model artifact to disk.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use premia_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("premia=info".parse()?))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    info!("premia starting...");

    // Dispatch to appropriate subcommand
    match cli.command {
        Commands::Serve(cmd) => cmd.run().await?,
        Commands::Predict(cmd) => cmd.run()?,
        Commands::Init(cmd) => cmd.run()?,
    }

    info!("premia completed successfully");
    Ok(())
}
