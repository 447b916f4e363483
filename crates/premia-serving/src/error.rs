//! Error types for the premia-serving crate.

use crate::config::ConfigError;
use crate::request::RequestError;
use premia_model::{ArtifactError, InferenceError, PredictError, SchemaError};
use thiserror::Error;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur while serving predictions.
#[derive(Debug, Error)]
pub enum ServingError {
    /// The model artifact could not be loaded or is unusable.
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// A request field violated its declared domain.
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    /// The record could not be reconciled with the model's schema.
    #[error("Schema mismatch: {0}")]
    Schema(#[from] SchemaError),

    /// The underlying predict call failed.
    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server error.
    #[error("Server error: {0}")]
    Server(String),
}

impl ServingError {
    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Check if this is a client error (bad input).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Schema(_))
    }

    /// Check if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Artifact(_) | Self::Inference(_) | Self::Server(_)
        )
    }
}

impl From<PredictError> for ServingError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Schema(e) => Self::Schema(e),
            PredictError::Inference(e) => Self::Inference(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServingError::Schema(SchemaError::MissingColumn("age".to_string()));
        assert_eq!(err.to_string(), "Schema mismatch: Missing required column: age");

        let err = ServingError::server("bind failed");
        assert_eq!(err.to_string(), "Server error: bind failed");
    }

    #[test]
    fn test_is_client_error() {
        let err = ServingError::Schema(SchemaError::MissingColumn("bmi".to_string()));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = ServingError::Request(RequestError::OutOfRange {
            field: "age",
            value: 150.0,
            min: 18.0,
            max: 100.0,
        });
        assert!(err.is_client_error());
    }

    #[test]
    fn test_is_server_error() {
        let err = ServingError::Inference(InferenceError::NonFinite);
        assert!(err.is_server_error());
        assert!(!err.is_client_error());

        let err = ServingError::Artifact(ArtifactError::invalid("broken"));
        assert!(err.is_server_error());
    }

    #[test]
    fn test_predict_error_split() {
        let err: ServingError = PredictError::Schema(SchemaError::MissingColumn(
            "smoker".to_string(),
        ))
        .into();
        assert!(matches!(err, ServingError::Schema(_)));

        let err: ServingError = PredictError::Inference(InferenceError::NonFinite).into();
        assert!(matches!(err, ServingError::Inference(_)));
    }
}
