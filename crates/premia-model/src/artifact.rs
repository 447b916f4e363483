//! Model artifact container, loading, and saving.
//!
//! An artifact is a single JSON file produced at export time. It carries a
//! format version, descriptive metadata, the feature schema descriptor, and
//! the regressor parameters. Loading validates internal consistency up
//! front so a served artifact can never fail on shape at prediction time.

use crate::error::{ArtifactError, ArtifactResult, PredictError};
use crate::record::Record;
use crate::regressor::Regressor;
use crate::schema::FeatureSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Current artifact format version.
pub const FORMAT_VERSION: u32 = 1;

/// Descriptive metadata carried alongside the model parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Human-readable model name.
    pub name: String,

    /// One-line description of the producing pipeline.
    #[serde(default)]
    pub description: String,

    /// Export timestamp as recorded by the exporter (RFC 3339).
    #[serde(default)]
    pub created_at: String,

    /// Offline evaluation metrics recorded at export time.
    #[serde(default)]
    pub metrics: HashMap<String, f64>,
}

/// A trained regression model plus everything needed to call it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version.
    pub format_version: u32,

    /// Descriptive metadata.
    pub metadata: ArtifactMetadata,

    /// Input schema descriptor attached at export time.
    pub schema: FeatureSchema,

    /// Regressor parameters.
    pub regressor: Regressor,
}

impl ModelArtifact {
    /// Assemble an artifact at the current format version, validating that
    /// the regressor matches the schema's encoded width.
    pub fn new(
        metadata: ArtifactMetadata,
        schema: FeatureSchema,
        regressor: Regressor,
    ) -> ArtifactResult<Self> {
        let artifact = Self {
            format_version: FORMAT_VERSION,
            metadata,
            schema,
            regressor,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Load an artifact from a JSON file.
    pub fn load(path: &Path) -> ArtifactResult<Self> {
        tracing::info!(path = %path.display(), "Loading model artifact");

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_slice(&data).map_err(ArtifactError::Parse)?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: artifact.format_version,
                supported: FORMAT_VERSION,
            });
        }
        artifact.validate()?;

        tracing::info!(
            path = %path.display(),
            name = %artifact.metadata.name,
            family = artifact.regressor.family(),
            columns = artifact.schema.len(),
            "Model artifact loaded"
        );
        Ok(artifact)
    }

    /// Write the artifact as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> ArtifactResult<()> {
        tracing::info!(
            path = %path.display(),
            name = %self.metadata.name,
            "Writing model artifact"
        );

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ArtifactError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let data = serde_json::to_vec_pretty(self).map_err(ArtifactError::Parse)?;
        std::fs::write(path, data).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate internal consistency of schema and regressor.
    pub fn validate(&self) -> ArtifactResult<()> {
        self.schema.validate()?;
        self.regressor.validate(self.schema.encoded_width())
    }

    /// Names of the input columns the model expects, in schema order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.schema.column_names()
    }

    /// Score one record: encode against the schema, then run the regressor.
    ///
    /// The record is expected to satisfy the schema; missing synthetic
    /// columns encode to their declared defaults, any other gap is a
    /// schema error.
    pub fn predict(&self, record: &Record) -> Result<f64, PredictError> {
        let features = self.schema.encode(record)?;
        let prediction = self.regressor.predict(&features)?;
        tracing::debug!(prediction, "Artifact prediction");
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::LinearRegressor;
    use crate::schema::ColumnSpec;
    use tempfile::tempdir;

    fn tiny_artifact() -> ModelArtifact {
        let schema = FeatureSchema::new(vec![
            ColumnSpec::numeric("age"),
            ColumnSpec::categorical("smoker", ["yes", "no"]),
            ColumnSpec::synthetic("index", 0.0),
        ]);
        let regressor = Regressor::Linear(LinearRegressor::new(
            vec![100.0, 5000.0, -5000.0, 0.0],
            1000.0,
        ));
        ModelArtifact::new(
            ArtifactMetadata {
                name: "tiny".to_string(),
                ..Default::default()
            },
            schema,
            regressor,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_width_mismatch() {
        let schema = FeatureSchema::new(vec![ColumnSpec::numeric("age")]);
        let regressor = Regressor::Linear(LinearRegressor::new(vec![1.0, 2.0], 0.0));
        let result = ModelArtifact::new(ArtifactMetadata::default(), schema, regressor);
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models").join("tiny.json");

        let artifact = tiny_artifact();
        artifact.save(&path).unwrap();

        let loaded = ModelArtifact::load(&path).unwrap();
        assert_eq!(artifact, loaded);
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let result = ModelArtifact::load(&path);
        assert!(matches!(result, Err(ArtifactError::NotFound(_))));
    }

    #[test]
    fn test_load_unparseable_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let result = ModelArtifact::load(&path);
        assert!(matches!(result, Err(ArtifactError::Parse(_))));
    }

    #[test]
    fn test_load_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");

        let mut artifact = tiny_artifact();
        artifact.format_version = 99;
        let data = serde_json::to_vec_pretty(&artifact).unwrap();
        std::fs::write(&path, data).unwrap();

        let result = ModelArtifact::load(&path);
        assert!(matches!(
            result,
            Err(ArtifactError::UnsupportedVersion {
                found: 99,
                supported: FORMAT_VERSION,
            })
        ));
    }

    #[test]
    fn test_load_inconsistent_parameters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inconsistent.json");

        let mut artifact = tiny_artifact();
        // Drop a weight so the regressor no longer matches the schema.
        if let Regressor::Linear(ref mut linear) = artifact.regressor {
            linear.weights.pop();
        }
        let data = serde_json::to_vec_pretty(&artifact).unwrap();
        std::fs::write(&path, data).unwrap();

        let result = ModelArtifact::load(&path);
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn test_feature_names() {
        let artifact = tiny_artifact();
        let names: Vec<&str> = artifact.feature_names().collect();
        assert_eq!(names, vec!["age", "smoker", "index"]);
    }

    #[test]
    fn test_predict() {
        let artifact = tiny_artifact();
        let mut record = Record::new();
        record.insert("age", 40u32);
        record.insert("smoker", "yes");

        // 1000 + 100*40 + 5000.
        let prediction = artifact.predict(&record).unwrap();
        assert!((prediction - 10000.0).abs() < 1e-9);
    }
}
