//! Gradient-boosted regression trees
//!
//! Mirrors the XGBoost JSON dump: every tree is a flat node array rooted at
//! index 0, a split sends the sample to `yes` when `x[feature] < threshold`
//! and to `no` otherwise. A NaN feature follows `missing` (or `no` when the
//! split has none). The prediction is `base_score` plus one leaf value per
//! tree.

use super::{ModelParameters, Predictor};
use crate::types::PollutantReading;

/// One node of a regression tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        missing: Option<usize>,
    },
    Leaf(f64),
}

/// A validated regression tree.
///
/// Children always have a larger index than their parent, so traversal
/// terminates; [`RegressionTree::new`] enforces this.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Build a tree, checking indices, feature slots and finiteness.
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, String> {
        if nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (i, node) in nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    if feature >= 4 {
                        return Err(format!("node {i}: feature index {feature} out of range (0-3)"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i}: threshold is not finite"));
                    }
                    for child in [Some(yes), Some(no), missing].into_iter().flatten() {
                        if child <= i || child >= nodes.len() {
                            return Err(format!(
                                "node {i}: child {child} must point forward into {} nodes",
                                nodes.len()
                            ));
                        }
                    }
                }
                TreeNode::Leaf(value) => {
                    if !value.is_finite() {
                        return Err(format!("node {i}: leaf value is not finite"));
                    }
                }
            }
        }
        Ok(Self { nodes })
    }

    pub fn leaf_value(&self, features: &[f64; 4]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf(value) => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let x = features[feature];
                    index = if x.is_nan() {
                        missing.unwrap_or(no)
                    } else if x < threshold {
                        yes
                    } else {
                        no
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// XGBoost-style additive tree ensemble.
#[derive(Debug, Clone)]
pub struct XgbRegressor {
    base_score: f64,
    trees: Vec<RegressionTree>,
}

impl XgbRegressor {
    pub fn new(base_score: f64, trees: Vec<RegressionTree>) -> Self {
        Self { base_score, trees }
    }

}

impl Predictor for XgbRegressor {
    fn predict(&self, reading: &PollutantReading) -> f64 {
        let features = reading.model_features();
        self.trees
            .iter()
            .fold(self.base_score, |acc, tree| acc + tree.leaf_value(&features))
    }

    fn algorithm(&self) -> &'static str {
        "Gradient-boosted trees"
    }

    fn parameters(&self) -> ModelParameters {
        ModelParameters {
            base_score: Some(self.base_score),
            n_trees: Some(self.trees.len()),
            n_nodes: Some(self.trees.iter().map(RegressionTree::node_count).sum()),
            ..ModelParameters::default()
        }
    }
}
