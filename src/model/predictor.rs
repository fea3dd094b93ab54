//! Learned risk predictor and classifier capabilities.
//!
//! The engine consumes these as opaque traits; the concrete artifact-backed
//! implementations evaluate serialized tree ensembles: a gradient-boosted
//! regressor for the continuous risk magnitude and a random forest for the
//! risky/not-risky label. How the ensembles were fitted is out of scope.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_artifact, ModelError, FEATURE_CONTRACT_VERSION, FEATURE_DIM};

/// Continuous risk magnitude per (product, disease) feature vector.
/// Unbounded in training; callers clamp to [0, 100] for display.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_DIM]) -> Result<f64, ModelError>;
}

/// Risky/not-risky label for the same feature vector.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &[f64; FEATURE_DIM]) -> Result<bool, ModelError>;
}

/// One node of a serialized decision tree. Children reference node indices
/// within the owning tree's `nodes` vec; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. The hop counter guards against
    /// malformed artifacts with reference cycles.
    fn eval(&self, features: &[f64; FEATURE_DIM]) -> Result<f64, ModelError> {
        let mut idx = 0usize;
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let v = features.get(*feature).copied().ok_or_else(|| {
                        ModelError::InvalidStructure(format!(
                            "split references feature {feature}, dim is {FEATURE_DIM}"
                        ))
                    })?;
                    idx = if v <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::InvalidStructure(format!(
                        "node index {idx} out of bounds"
                    )))
                }
            }
        }
        Err(ModelError::InvalidStructure(
            "tree walk did not terminate (cycle?)".into(),
        ))
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidStructure("tree has no nodes".into()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_DIM {
                    return Err(ModelError::InvalidStructure(format!(
                        "node {i} splits on feature {feature}, dim is {FEATURE_DIM}"
                    )));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(ModelError::InvalidStructure(format!(
                        "node {i} references a child outside the tree"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Gradient-boosted regression ensemble:
/// `base_score + learning_rate * Σ tree(x)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedRegressor {
    feature_version: u32,
    base_score: f64,
    learning_rate: f64,
    trees: Vec<DecisionTree>,
}

impl GradientBoostedRegressor {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model: Self = read_artifact(path)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_parts(base_score: f64, learning_rate: f64, trees: Vec<DecisionTree>) -> Self {
        Self {
            feature_version: FEATURE_CONTRACT_VERSION,
            base_score,
            learning_rate,
            trees,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_version != FEATURE_CONTRACT_VERSION {
            return Err(ModelError::ContractMismatch {
                artifact: "regressor",
                artifact_version: self.feature_version,
                engine_version: FEATURE_CONTRACT_VERSION,
            });
        }
        if self.trees.is_empty() {
            return Err(ModelError::InvalidStructure(
                "regressor has no trees".into(),
            ));
        }
        self.trees.iter().try_for_each(DecisionTree::validate)
    }
}

impl Predictor for GradientBoostedRegressor {
    fn predict(&self, features: &[f64; FEATURE_DIM]) -> Result<f64, ModelError> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.eval(features)?;
        }
        Ok(self.base_score + self.learning_rate * sum)
    }
}

/// Random-forest classifier: mean leaf vote ≥ 0.5 → risky.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    feature_version: u32,
    trees: Vec<DecisionTree>,
}

impl RandomForestClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model: Self = read_artifact(path)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_parts(trees: Vec<DecisionTree>) -> Self {
        Self {
            feature_version: FEATURE_CONTRACT_VERSION,
            trees,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_version != FEATURE_CONTRACT_VERSION {
            return Err(ModelError::ContractMismatch {
                artifact: "classifier",
                artifact_version: self.feature_version,
                engine_version: FEATURE_CONTRACT_VERSION,
            });
        }
        if self.trees.is_empty() {
            return Err(ModelError::InvalidStructure(
                "classifier has no trees".into(),
            ));
        }
        self.trees.iter().try_for_each(DecisionTree::validate)
    }
}

impl Classifier for RandomForestClassifier {
    fn classify(&self, features: &[f64; FEATURE_DIM]) -> Result<bool, ModelError> {
        let mut votes = 0.0;
        for tree in &self.trees {
            votes += tree.eval(features)?;
        }
        Ok(votes / self.trees.len() as f64 >= 0.5)
    }
}
