//! Error types for the premia-model crate.
//!
//! Three error families cover the artifact lifecycle: [`ArtifactError`] for
//! loading, saving, and validating artifacts, [`SchemaError`] for record
//! alignment and feature encoding, and [`InferenceError`] for failures
//! inside the regressor itself. [`PredictError`] is the sum of the last two,
//! returned by a single prediction call against a loaded artifact.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Errors that can occur while loading, saving, or validating an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file not found.
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),

    /// I/O error during artifact operations.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Artifact payload is not valid JSON for the expected shape.
    #[error("Artifact parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Artifact format version is not supported by this build.
    #[error("Unsupported artifact format version: found {found}, supported {supported}")]
    UnsupportedVersion {
        /// Version recorded in the file.
        found: u32,
        /// Version this build supports.
        supported: u32,
    },

    /// Artifact parameters are internally inconsistent.
    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    /// Create an invalid-artifact error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Errors that can occur while aligning or encoding a record against a
/// feature schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required column is missing and has no declared default.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A categorical column received a value outside its declared categories.
    #[error("Unknown category {value:?} for column {column}")]
    UnknownCategory {
        /// Column name.
        column: String,
        /// The rejected value.
        value: String,
    },

    /// A numeric column received a non-numeric value.
    #[error("Column {0} expects a numeric value")]
    NotNumeric(String),

    /// A categorical column received a non-text value.
    #[error("Column {0} expects a categorical value")]
    NotCategorical(String),
}

/// Errors that can occur inside a regressor during prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// Feature vector length does not match what the regressor expects.
    #[error("Feature arity mismatch: expected {expected}, got {got}")]
    WrongArity {
        /// Width the regressor was fitted on.
        expected: usize,
        /// Width of the vector it received.
        got: usize,
    },

    /// The regressor produced a non-finite value.
    #[error("Prediction is not finite")]
    NonFinite,

    /// Tree traversal left the node table.
    #[error("Corrupt tree: {0}")]
    CorruptTree(String),
}

impl InferenceError {
    /// Create a corrupt-tree error.
    pub fn corrupt_tree(msg: impl Into<String>) -> Self {
        Self::CorruptTree(msg.into())
    }
}

/// Failure of a single prediction call against a loaded artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// The record could not be encoded against the artifact schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The regressor failed to produce a value.
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_error_display() {
        let err = ArtifactError::NotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "Artifact not found: /tmp/missing.json");

        let err = ArtifactError::UnsupportedVersion {
            found: 7,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported artifact format version: found 7, supported 1"
        );

        let err = ArtifactError::invalid("weights do not match schema");
        assert_eq!(err.to_string(), "Invalid artifact: weights do not match schema");
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::MissingColumn("age".to_string());
        assert_eq!(err.to_string(), "Missing required column: age");

        let err = SchemaError::UnknownCategory {
            column: "region".to_string(),
            value: "midwest".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category \"midwest\" for column region");
    }

    #[test]
    fn test_inference_error_display() {
        let err = InferenceError::WrongArity {
            expected: 12,
            got: 3,
        };
        assert_eq!(err.to_string(), "Feature arity mismatch: expected 12, got 3");

        assert_eq!(InferenceError::NonFinite.to_string(), "Prediction is not finite");
    }

    #[test]
    fn test_predict_error_is_transparent() {
        let err: PredictError = SchemaError::MissingColumn("bmi".to_string()).into();
        assert_eq!(err.to_string(), "Missing required column: bmi");

        let err: PredictError = InferenceError::NonFinite.into();
        assert_eq!(err.to_string(), "Prediction is not finite");
    }
}
