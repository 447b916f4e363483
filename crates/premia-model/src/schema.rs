//! Versioned feature schema descriptor and feature encoding.
//!
//! The schema is written into the artifact at export time and describes the
//! exact columns the regressor was fitted on, in order. Serving code never
//! reflects on the fitted estimator: alignment and encoding are driven
//! entirely by this descriptor.
//!
//! Categorical columns one-hot expand in declared category order, so a
//! six-column insurance schema (`age`, `sex`, `bmi`, `children`, `smoker`,
//! `region`) plus a synthetic `index` column encodes to a 12-wide vector.

use crate::error::{ArtifactError, ArtifactResult, SchemaError};
use crate::record::{Record, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current schema descriptor version.
pub const SCHEMA_VERSION: u32 = 1;

/// How a single input column is interpreted during encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnKind {
    /// Raw numeric feature, passed through unchanged.
    Numeric,

    /// Categorical feature, one-hot expanded in declared category order.
    Categorical {
        /// Accepted category values, in encoding order.
        categories: Vec<String>,
    },

    /// Column the producing pipeline carried but callers never supply.
    /// Alignment injects the declared default.
    Synthetic {
        /// Value injected during alignment.
        default: f64,
    },
}

/// A single column the model expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as the producing pipeline knew it.
    pub name: String,

    /// Interpretation of the column.
    pub kind: ColumnKind,
}

impl ColumnSpec {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Numeric,
        }
    }

    /// Create a categorical column with its category vocabulary.
    pub fn categorical<I, S>(name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: ColumnKind::Categorical {
                categories: categories.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Create a synthetic column with its injection default.
    pub fn synthetic(name: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Synthetic { default },
        }
    }

    /// Number of encoded features this column contributes.
    pub fn encoded_width(&self) -> usize {
        match &self.kind {
            ColumnKind::Numeric | ColumnKind::Synthetic { .. } => 1,
            ColumnKind::Categorical { categories } => categories.len(),
        }
    }
}

/// Ordered, versioned description of the model's expected input columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    /// Descriptor version, independent of the artifact format version.
    pub schema_version: u32,

    /// Expected columns, in the order the regressor consumes them.
    pub columns: Vec<ColumnSpec>,
}

impl FeatureSchema {
    /// Create a schema from its columns at the current descriptor version.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            columns,
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate over column names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema declares no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Width of the encoded feature vector after one-hot expansion.
    pub fn encoded_width(&self) -> usize {
        self.columns.iter().map(ColumnSpec::encoded_width).sum()
    }

    /// Expanded feature names. Categorical columns contribute one name per
    /// category (`region` becomes `region_southeast`, `region_southwest`, ...).
    pub fn encoded_feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.encoded_width());
        for column in &self.columns {
            match &column.kind {
                ColumnKind::Numeric | ColumnKind::Synthetic { .. } => {
                    names.push(column.name.clone());
                }
                ColumnKind::Categorical { categories } => {
                    for category in categories {
                        names.push(format!("{}_{}", column.name, category));
                    }
                }
            }
        }
        names
    }

    /// Align a record to this schema.
    ///
    /// The result contains exactly the schema's columns, in schema order.
    /// A schema column missing from the input is injected with its declared
    /// default iff the column is synthetic; otherwise alignment fails with
    /// [`SchemaError::MissingColumn`]. Input columns the schema does not
    /// name are dropped. Aligning an already aligned record is the identity.
    pub fn align(&self, record: &Record) -> Result<Record, SchemaError> {
        let mut aligned = Record::with_capacity(self.columns.len());
        for column in &self.columns {
            match record.get(&column.name) {
                Some(value) => aligned.insert(column.name.clone(), value.clone()),
                None => match &column.kind {
                    ColumnKind::Synthetic { default } => {
                        aligned.insert(column.name.clone(), *default);
                    }
                    _ => return Err(SchemaError::MissingColumn(column.name.clone())),
                },
            }
        }
        Ok(aligned)
    }

    /// Encode a record into the feature vector the regressor consumes.
    ///
    /// Missing synthetic columns encode to their defaults, so
    /// `encode(align(r))` and `encode(r)` agree whenever both succeed.
    pub fn encode(&self, record: &Record) -> Result<Vec<f64>, SchemaError> {
        let mut features = Vec::with_capacity(self.encoded_width());
        for column in &self.columns {
            match &column.kind {
                ColumnKind::Numeric => {
                    let value = record
                        .get(&column.name)
                        .ok_or_else(|| SchemaError::MissingColumn(column.name.clone()))?;
                    let number = value
                        .as_number()
                        .ok_or_else(|| SchemaError::NotNumeric(column.name.clone()))?;
                    features.push(number);
                }
                ColumnKind::Synthetic { default } => match record.get(&column.name) {
                    Some(value) => {
                        let number = value
                            .as_number()
                            .ok_or_else(|| SchemaError::NotNumeric(column.name.clone()))?;
                        features.push(number);
                    }
                    None => features.push(*default),
                },
                ColumnKind::Categorical { categories } => {
                    let value = record
                        .get(&column.name)
                        .ok_or_else(|| SchemaError::MissingColumn(column.name.clone()))?;
                    let text = value
                        .as_text()
                        .ok_or_else(|| SchemaError::NotCategorical(column.name.clone()))?;
                    let position = categories.iter().position(|c| c == text).ok_or_else(|| {
                        SchemaError::UnknownCategory {
                            column: column.name.clone(),
                            value: text.to_string(),
                        }
                    })?;
                    for i in 0..categories.len() {
                        features.push(if i == position { 1.0 } else { 0.0 });
                    }
                }
            }
        }
        Ok(features)
    }

    /// Validate internal consistency: unique column names, non-empty
    /// category vocabularies, finite synthetic defaults.
    pub fn validate(&self) -> ArtifactResult<()> {
        if self.columns.is_empty() {
            return Err(ArtifactError::invalid("schema declares no columns"));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ArtifactError::invalid(format!(
                    "duplicate schema column: {}",
                    column.name
                )));
            }
            match &column.kind {
                ColumnKind::Categorical { categories } => {
                    if categories.is_empty() {
                        return Err(ArtifactError::invalid(format!(
                            "column {} has an empty category vocabulary",
                            column.name
                        )));
                    }
                    let unique: HashSet<&str> =
                        categories.iter().map(String::as_str).collect();
                    if unique.len() != categories.len() {
                        return Err(ArtifactError::invalid(format!(
                            "column {} repeats a category",
                            column.name
                        )));
                    }
                }
                ColumnKind::Synthetic { default } => {
                    if !default.is_finite() {
                        return Err(ArtifactError::invalid(format!(
                            "column {} has a non-finite default",
                            column.name
                        )));
                    }
                }
                ColumnKind::Numeric => {}
            }
        }
        Ok(())
    }
}
