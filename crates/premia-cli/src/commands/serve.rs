//! Serve Command Implementation
//!
//! Hosts the browser prediction form on a local port. The model artifact
//! is loaded once at startup and shared read-only across requests.

use anyhow::{Context, Result};
use clap::Args;
use premia_model::ModelArtifact;
use premia_serving::{web, AppConfig, Predictor};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Serve the browser prediction form
///
/// This command loads a model artifact, then serves the prediction form
/// and its JSON API until interrupted.
///
/// # Example
///
/// ```bash
/// premia serve \
///     --artifact artifacts/insurance.json \
///     --host 127.0.0.1 \
///     --port 8501
/// ```
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Path to the model artifact to serve
    #[arg(long, default_value = "artifacts/insurance.json")]
    pub artifact: PathBuf,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8501)]
    pub port: u16,
}

impl ServeCommand {
    /// Execute the serve command
    pub async fn run(&self) -> Result<()> {
        let config = AppConfig::builder()
            .host(&self.host)
            .port(self.port)
            .artifact_path(&self.artifact)
            .build();
        config
            .validate()
            .context("Invalid server configuration")?;

        let artifact = ModelArtifact::load(&config.artifact_path).with_context(|| {
            format!(
                "Failed to load model artifact from {} (run `premia init` to create one)",
                config.artifact_path.display()
            )
        })?;
        info!(
            model = %artifact.metadata.name,
            "Loaded model artifact"
        );

        let predictor = Predictor::new(Arc::new(artifact));
        web::serve(&config, predictor)
            .await
            .context("Server exited with an error")?;

        Ok(())
    }
}
