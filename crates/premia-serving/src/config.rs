//! Application configuration for the local web surface.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the prediction form server.
///
/// # Example
///
/// ```
/// use premia_serving::config::AppConfig;
///
/// let config = AppConfig::builder()
///     .host("127.0.0.1")
///     .port(8501)
///     .artifact_path("artifacts/insurance.json")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host address to bind to (default: "127.0.0.1")
    pub host: String,

    /// Port to listen on (default: 8501)
    pub port: u16,

    /// Path to the model artifact to serve
    pub artifact_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            artifact_path: PathBuf::from("artifacts/insurance.json"),
        }
    }
}

impl AppConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyArtifactPath);
        }
        Ok(())
    }
}

/// Builder for [`AppConfig`].
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    artifact_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port number.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the artifact path.
    pub fn artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact_path = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        let default = AppConfig::default();
        AppConfig {
            host: self.host.unwrap_or(default.host),
            port: self.port.unwrap_or(default.port),
            artifact_path: self.artifact_path.unwrap_or(default.artifact_path),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Host must be non-empty.
    #[error("Invalid host: host cannot be empty")]
    EmptyHost,

    /// Port 0 would bind an arbitrary port.
    #[error("Invalid port number: port cannot be 0")]
    InvalidPort,

    /// Artifact path must be non-empty.
    #[error("Invalid artifact path: path cannot be empty")]
    EmptyArtifactPath,
}
