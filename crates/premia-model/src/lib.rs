//! Model artifact layer for the premia insurance charges predictor.
//!
//! This crate owns everything between a column/value record and a dollar
//! estimate: the versioned artifact file format, the feature schema
//! descriptor, one-hot feature encoding, and the regressor families.
//!
//! # Overview
//!
//! - **ModelArtifact**: load, save, and validate the serialized model file
//! - **FeatureSchema**: versioned input descriptor with alignment and encoding
//! - **Regressor**: linear and tree-ensemble model families
//! - **Record**: ordered column/value input
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    align     ┌──────────┐    encode    ┌───────────┐
//! │  Record  │ ───────────▶ │  Record  │ ───────────▶ │ Vec<f64>  │
//! └──────────┘  (schema)    └──────────┘  (one-hot)   └───────────┘
//!                                                           │
//!                                                           ▼
//!                                                    ┌─────────────┐
//!                                                    │  Regressor  │ ──▶ f64
//!                                                    └─────────────┘
//! ```
//!
//! The schema travels inside the artifact, so serving code never inspects
//! the fitted model to learn its inputs; alignment injects declared
//! synthetic defaults and rejects anything else that is missing.
//!
//! # Quick Start
//!
//! ```
//! use premia_model::{demo, Record};
//!
//! # fn main() -> Result<(), premia_model::PredictError> {
//! let artifact = demo::insurance_demo();
//!
//! let mut record = Record::new();
//! record.insert("age", 30u32);
//! record.insert("sex", "male");
//! record.insert("bmi", 25.0);
//! record.insert("children", 0u32);
//! record.insert("smoker", "no");
//! record.insert("region", "southeast");
//!
//! let aligned = artifact.schema.align(&record)?;
//! let charges = artifact.predict(&aligned)?;
//! assert!(charges.is_finite());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Loading returns [`ArtifactError`]; prediction returns [`PredictError`],
//! which separates schema problems from regressor failures:
//!
//! ```
//! use premia_model::{PredictError, SchemaError};
//!
//! fn describe(err: &PredictError) -> String {
//!     match err {
//!         PredictError::Schema(SchemaError::MissingColumn(name)) => {
//!             format!("missing input: {name}")
//!         }
//!         other => other.to_string(),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod artifact;
pub mod demo;
pub mod error;
pub mod record;
pub mod regressor;
pub mod schema;

// Re-export main types at crate root for convenience
pub use artifact::{ArtifactMetadata, ModelArtifact, FORMAT_VERSION};
pub use error::{ArtifactError, ArtifactResult, InferenceError, PredictError, SchemaError};
pub use record::{Record, Value};
pub use regressor::{
    DecisionTree, LinearRegressor, Regressor, TreeEnsembleRegressor, TreeNode,
};
pub use schema::{ColumnKind, ColumnSpec, FeatureSchema, SCHEMA_VERSION};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "premia-model");
    }

    #[test]
    fn test_integration_flow() {
        // Save the demo artifact, load it back, and score a record through
        // alignment, encoding, and the regressor.
        let dir = tempdir().unwrap();
        let path = dir.path().join("insurance.json");

        demo::insurance_demo().save(&path).unwrap();
        let artifact = ModelArtifact::load(&path).unwrap();

        let names: Vec<&str> = artifact.feature_names().collect();
        assert_eq!(
            names,
            vec!["age", "sex", "bmi", "children", "smoker", "region", "index"]
        );

        let mut record = Record::new();
        record.insert("age", 52u32);
        record.insert("sex", "female");
        record.insert("bmi", 31.2);
        record.insert("children", 2u32);
        record.insert("smoker", "yes");
        record.insert("region", "southwest");

        let aligned = artifact.schema.align(&record).unwrap();
        assert_eq!(aligned.get("index"), Some(&Value::Number(0.0)));

        let charges = artifact.predict(&aligned).unwrap();
        assert!(charges.is_finite());
        assert!(charges > 0.0);
    }
}
