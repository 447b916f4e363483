//! Regression model families evaluated over encoded feature vectors.
//!
//! Artifacts name their model family explicitly via the tagged [`Regressor`]
//! enum. Two families cover the producing toolchain's exports: plain linear
//! models and additive tree ensembles (gradient-boosted or averaged forests,
//! with the averaging folded into `scale`).

use crate::error::{ArtifactError, ArtifactResult, InferenceError};
use serde::{Deserialize, Serialize};

/// A serialized regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Regressor {
    /// Linear model: dot product plus intercept.
    Linear(LinearRegressor),

    /// Additive ensemble of binary regression trees.
    TreeEnsemble(TreeEnsembleRegressor),
}

impl Regressor {
    /// Number of features the regressor consumes.
    pub fn input_width(&self) -> usize {
        match self {
            Regressor::Linear(model) => model.weights.len(),
            Regressor::TreeEnsemble(model) => model.num_features,
        }
    }

    /// Short family name for logs and metadata displays.
    pub fn family(&self) -> &'static str {
        match self {
            Regressor::Linear(_) => "linear",
            Regressor::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    /// Predict from an encoded feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        match self {
            Regressor::Linear(model) => model.predict(features),
            Regressor::TreeEnsemble(model) => model.predict(features),
        }
    }

    /// Validate parameters against the feature width the schema encodes to.
    pub fn validate(&self, expected_width: usize) -> ArtifactResult<()> {
        if self.input_width() != expected_width {
            return Err(ArtifactError::invalid(format!(
                "regressor consumes {} features but the schema encodes {}",
                self.input_width(),
                expected_width
            )));
        }
        match self {
            Regressor::Linear(model) => model.validate(),
            Regressor::TreeEnsemble(model) => model.validate(),
        }
    }
}

/// Linear model: `intercept + weights . features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Per-feature coefficients, one per encoded feature.
    pub weights: Vec<f64>,

    /// Additive intercept term.
    pub intercept: f64,
}

impl LinearRegressor {
    /// Create a linear regressor from its fitted parameters.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Predict from an encoded feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.weights.len() {
            return Err(InferenceError::WrongArity {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        let prediction = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if !prediction.is_finite() {
            return Err(InferenceError::NonFinite);
        }
        Ok(prediction)
    }

    fn validate(&self) -> ArtifactResult<()> {
        if self.weights.is_empty() {
            return Err(ArtifactError::invalid("linear model has no weights"));
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err(ArtifactError::invalid(
                "linear model has non-finite parameters",
            ));
        }
        Ok(())
    }
}

/// One node of a binary regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal split: go left when `features[feature] <= threshold`.
    Split {
        /// Index into the encoded feature vector.
        feature: usize,
        /// Split threshold.
        threshold: f64,
        /// Node index taken when the feature is at or below the threshold.
        left: usize,
        /// Node index taken when the feature is above the threshold.
        right: usize,
    },

    /// Terminal node carrying the tree's contribution.
    Leaf {
        /// Contribution added to the ensemble sum.
        value: f64,
    },
}

/// A single regression tree stored as a flat node table rooted at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Node table; split children index into this table.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one feature vector.
    pub fn evaluate(&self, features: &[f64]) -> Result<f64, InferenceError> {
        let mut index = 0;
        // A well-formed tree reaches a leaf within `nodes.len()` hops.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features.get(*feature).copied().ok_or_else(|| {
                        InferenceError::corrupt_tree(format!(
                            "split references feature {feature} beyond input width {}",
                            features.len()
                        ))
                    })?;
                    index = if x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(InferenceError::corrupt_tree(format!(
                        "node index {index} outside table of {}",
                        self.nodes.len()
                    )))
                }
            }
        }
        Err(InferenceError::corrupt_tree(
            "traversal did not reach a leaf",
        ))
    }
}

/// Additive ensemble of regression trees.
///
/// `prediction = base + scale * sum(tree_i(features))`. Gradient-boosted
/// exports bake the learning rate into `scale`; averaged forests bake `1/n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsembleRegressor {
    /// Feature width the trees were grown on.
    pub num_features: usize,

    /// Prediction before any tree contributes.
    pub base: f64,

    /// Multiplier applied to the summed tree outputs.
    pub scale: f64,

    /// Trees whose outputs are summed.
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsembleRegressor {
    /// Predict from an encoded feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.num_features {
            return Err(InferenceError::WrongArity {
                expected: self.num_features,
                got: features.len(),
            });
        }
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(features)?;
        }
        let prediction = self.base + self.scale * total;
        if !prediction.is_finite() {
            return Err(InferenceError::NonFinite);
        }
        Ok(prediction)
    }

    fn validate(&self) -> ArtifactResult<()> {
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid("tree ensemble has no trees"));
        }
        if !self.base.is_finite() || !self.scale.is_finite() {
            return Err(ArtifactError::invalid(
                "tree ensemble has non-finite base or scale",
            ));
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ArtifactError::invalid(format!(
                    "tree {tree_index} has no nodes"
                )));
            }
            for node in &tree.nodes {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.num_features {
                        return Err(ArtifactError::invalid(format!(
                            "tree {tree_index} splits on feature {feature} but the ensemble is {}-wide",
                            self.num_features
                        )));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(ArtifactError::invalid(format!(
                            "tree {tree_index} has a child index outside its node table"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
