//! Premia CLI Library
//!
//! This crate provides the command-line interface for premia, including:
//!
//! - **Serve**: Host the browser prediction form on a local port
//! - **Predict**: Run a single prediction from the terminal
//! - **Init**: Write the bundled model artifact to disk
//!
//! # Example
//!
//! ```bash
//! # Write the bundled artifact
//! premia init --output artifacts/insurance.json
//!
//! # Serve the prediction form
//! premia serve --artifact artifacts/insurance.json --port 8501
//!
//! # Predict from the terminal
//! premia predict --artifact artifacts/insurance.json --age 45 --smoker yes
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{InitCommand, PredictCommand, ServeCommand};

/// Premia - an insurance charges predictor
///
/// Estimates annual medical insurance charges from six demographic and
/// lifestyle inputs, served as a browser form or from the terminal.
#[derive(Parser, Debug)]
#[command(name = "premia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the browser prediction form
    Serve(ServeCommand),

    /// Run a single prediction from the terminal
    Predict(PredictCommand),

    /// Write the bundled model artifact to disk
    Init(InitCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
