//! CLI Command Implementations
//!
//! This module contains the implementations for all CLI subcommands:
//!
//! - [`serve`]: Host the browser prediction form
//! - [`predict`]: One-off prediction from the terminal
//! - [`init`]: Write the bundled model artifact to disk

mod init;
mod predict;
mod serve;

pub use init::InitCommand;
pub use predict::PredictCommand;
pub use serve::ServeCommand;
