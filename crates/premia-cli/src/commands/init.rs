//! Init Command Implementation
//!
//! Writes the bundled model artifact to disk so `serve` and `predict` work
//! out of the box. The parameters are fixed constants shipped with the
//! binary; no training happens here.

use anyhow::{Context, Result};
use clap::Args;
use premia_model::demo;
use std::path::PathBuf;
use tracing::info;

/// Write the bundled model artifact to disk
///
/// # Example
///
/// ```bash
/// premia init --output artifacts/insurance.json
/// ```
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Where to write the artifact
    #[arg(long, default_value = "artifacts/insurance.json")]
    pub output: PathBuf,

    /// Overwrite an existing artifact
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn run(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let artifact = demo::insurance_demo();
        artifact
            .save(&self.output)
            .with_context(|| format!("Failed to write artifact to {}", self.output.display()))?;

        info!(
            model = %artifact.metadata.name,
            path = %self.output.display(),
            "Wrote bundled artifact"
        );
        println!("Wrote {} to {}", artifact.metadata.name, self.output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::ModelArtifact;

    #[test]
    fn test_init_command_defaults() {
        let cmd = InitCommand {
            output: PathBuf::from("artifacts/insurance.json"),
            force: false,
        };
        assert!(!cmd.force);
        assert_eq!(cmd.output, PathBuf::from("artifacts/insurance.json"));
    }

    #[test]
    fn test_init_writes_a_loadable_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("insurance.json");

        let cmd = InitCommand {
            output: output.clone(),
            force: false,
        };
        cmd.run().unwrap();

        let loaded = ModelArtifact::load(&output).unwrap();
        assert_eq!(loaded, demo::insurance_demo());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("insurance.json");

        let cmd = InitCommand {
            output: output.clone(),
            force: false,
        };
        cmd.run().unwrap();

        let err = cmd.run().unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let forced = InitCommand {
            output,
            force: true,
        };
        forced.run().unwrap();
    }
}
