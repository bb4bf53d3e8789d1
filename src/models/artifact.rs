//! Serialized model artifacts
//!
//! Each model is a JSON document tagged by `kind`:
//!
//! ```json
//! { "kind": "ridge", "intercept": 1.2, "coefficients": [0.05, 0.31, 0.12, 0.61], "alpha": 1.0 }
//! { "kind": "xgboost", "base_score": 0.5,
//!   "trees": [ { "nodes": [ { "feature": 3, "threshold": 100.0, "yes": 1, "no": 2 },
//!                           { "leaf": 40.1 }, { "leaf": 120.7 } ] } ] }
//! ```
//!
//! Coefficients and split features use the training column order
//! (CO, Ozone, NO₂, PM2.5). An optional `feature_names` array is checked
//! against that order so an artifact trained on a different layout is
//! rejected at load instead of silently mis-predicting.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::boosted::{RegressionTree, TreeNode, XgbRegressor};
use super::linear::{LassoRegressor, LinearCoefficients, LinearRegressor, RidgeRegressor};
use super::Predictor;
use crate::types::MODEL_FEATURE_ORDER;

/// Artifact load failures. The registry logs these and skips the model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact file not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// On-disk model document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Xgboost(TreeEnsembleArtifact),
    LinearRegression(LinearArtifact),
    Lasso(LinearArtifact),
    Ridge(LinearArtifact),
}

/// Weights of a linear-family model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Regularization strength, recorded for Lasso/Ridge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

/// Additive tree ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsembleArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<NodeArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeArtifact {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        /// Child for a missing (NaN) feature
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing: Option<usize>,
    },
    Leaf {
        leaf: f64,
    },
}

impl ModelArtifact {
    /// Validate the document and build its predictor.
    pub fn into_predictor(self) -> Result<Arc<dyn Predictor>, ArtifactError> {
        match self {
            ModelArtifact::Xgboost(ensemble) => {
                check_feature_names(ensemble.feature_names.as_deref())?;
                if !ensemble.base_score.is_finite() {
                    return Err(ArtifactError::Invalid("base_score is not finite".to_string()));
                }
                if ensemble.trees.is_empty() {
                    return Err(ArtifactError::Invalid("ensemble has no trees".to_string()));
                }
                let trees = ensemble
                    .trees
                    .into_iter()
                    .enumerate()
                    .map(|(i, tree)| {
                        RegressionTree::new(tree.nodes.into_iter().map(TreeNode::from).collect())
                            .map_err(|e| ArtifactError::Invalid(format!("tree {i}: {e}")))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Arc::new(XgbRegressor::new(ensemble.base_score, trees)))
            }
            ModelArtifact::LinearRegression(linear) => {
                let weights = linear.weights()?;
                Ok(Arc::new(LinearRegressor::new(weights)))
            }
            ModelArtifact::Lasso(linear) => {
                let weights = linear.weights()?;
                Ok(Arc::new(LassoRegressor::new(weights, linear.alpha)))
            }
            ModelArtifact::Ridge(linear) => {
                let weights = linear.weights()?;
                Ok(Arc::new(RidgeRegressor::new(weights, linear.alpha)))
            }
        }
    }
}

impl LinearArtifact {
    fn weights(&self) -> Result<LinearCoefficients, ArtifactError> {
        check_feature_names(self.feature_names.as_deref())?;
        let coefficients: [f64; 4] = self.coefficients.as_slice().try_into().map_err(|_| {
            ArtifactError::Invalid(format!(
                "expected 4 coefficients, found {}",
                self.coefficients.len()
            ))
        })?;
        if !self.intercept.is_finite() || coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid("weights must be finite".to_string()));
        }
        if let Some(alpha) = self.alpha {
            if !alpha.is_finite() || alpha < 0.0 {
                return Err(ArtifactError::Invalid(format!("alpha = {alpha} must be >= 0")));
            }
        }
        Ok(LinearCoefficients {
            intercept: self.intercept,
            coefficients,
        })
    }
}

impl From<NodeArtifact> for TreeNode {
    fn from(node: NodeArtifact) -> Self {
        match node {
            NodeArtifact::Split {
                feature,
                threshold,
                yes,
                no,
                missing,
            } => TreeNode::Split {
                feature,
                threshold,
                yes,
                no,
                missing,
            },
            NodeArtifact::Leaf { leaf } => TreeNode::Leaf(leaf),
        }
    }
}

fn check_feature_names(names: Option<&[String]>) -> Result<(), ArtifactError> {
    let Some(names) = names else {
        return Ok(());
    };
    let expected: Vec<&str> = MODEL_FEATURE_ORDER.iter().map(|p| p.key()).collect();
    let matches = names.len() == expected.len()
        && names
            .iter()
            .zip(&expected)
            .all(|(got, want)| got.eq_ignore_ascii_case(want));
    if matches {
        Ok(())
    } else {
        Err(ArtifactError::Invalid(format!(
            "feature_names {names:?} do not match model feature order {expected:?}"
        )))
    }
}

/// Read, parse and validate one artifact file.
pub fn load_artifact(path: &Path) -> Result<Arc<dyn Predictor>, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let data = std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: ModelArtifact =
        serde_json::from_slice(&data).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    artifact.into_predictor()
}

/// Write an artifact atomically (temp file, then rename).
pub fn save_artifact(artifact: &ModelArtifact, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_vec_pretty(artifact)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let tmp_path = path.with_extension("json.tmp");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&tmp_path, &json)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PollutantReading;

    fn reading() -> PollutantReading {
        PollutantReading::new(50.0, 60.0, 80.0, 120.0).unwrap()
    }

    #[test]
    fn test_parse_ridge_document() {
        let json = r#"{"kind":"ridge","intercept":1.0,"coefficients":[0.0,0.0,0.0,0.5],"alpha":2.0}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        let model = artifact.into_predictor().unwrap();
        assert_eq!(model.algorithm(), "Ridge (L2) regression");
        assert_eq!(model.predict(&reading()), 61.0);
    }

    #[test]
    fn test_parse_xgboost_document() {
        let json = r#"{
            "kind": "xgboost",
            "base_score": 0.5,
            "trees": [
                { "nodes": [
                    { "feature": 3, "threshold": 100.0, "yes": 1, "no": 2 },
                    { "leaf": 10.0 },
                    { "leaf": 100.0 }
                ] }
            ]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        let model = artifact.into_predictor().unwrap();
        assert_eq!(model.predict(&reading()), 100.5);
    }

    #[test]
    fn test_missing_child_survives_save() {
        let json = r#"{
            "kind": "xgboost",
            "trees": [
                { "nodes": [
                    { "feature": 0, "threshold": 10.0, "yes": 1, "no": 2, "missing": 3 },
                    { "leaf": 1.0 },
                    { "leaf": 2.0 },
                    { "leaf": 3.0 }
                ] }
            ]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best_model.json");
        save_artifact(&artifact, &path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(saved["trees"][0]["nodes"][0]["missing"], 3);
        assert!(saved["trees"][0]["nodes"][1].get("missing").is_none());
        assert!(load_artifact(&path).is_ok());
    }

    #[test]
    fn test_backward_missing_child_rejected() {
        let json = r#"{
            "kind": "xgboost",
            "trees": [
                { "nodes": [
                    { "feature": 0, "threshold": 10.0, "yes": 1, "no": 2, "missing": 0 },
                    { "leaf": 1.0 },
                    { "leaf": 2.0 }
                ] }
            ]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(matches!(
            artifact.into_predictor(),
            Err(ArtifactError::Invalid(_))
        ));
    }

    #[test]
    fn test_wrong_coefficient_count_rejected() {
        let json = r#"{"kind":"linear_regression","intercept":1.0,"coefficients":[1.0,2.0,3.0]}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        let err = artifact.into_predictor().unwrap_err();
        assert!(err.to_string().contains("expected 4 coefficients"));
    }

    #[test]
    fn test_feature_names_must_match_training_order() {
        let ok = r#"{"kind":"lasso","feature_names":["co","ozone","no2","pm25"],"intercept":0.0,"coefficients":[1,1,1,1]}"#;
        let artifact: ModelArtifact = serde_json::from_str(ok).unwrap();
        assert!(artifact.into_predictor().is_ok());

        let swapped = r#"{"kind":"lasso","feature_names":["co","no2","ozone","pm25"],"intercept":0.0,"coefficients":[1,1,1,1]}"#;
        let artifact: ModelArtifact = serde_json::from_str(swapped).unwrap();
        assert!(matches!(
            artifact.into_predictor(),
            Err(ArtifactError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_ensemble_rejected() {
        let json = r#"{"kind":"xgboost","base_score":1.0,"trees":[]}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(artifact.into_predictor().is_err());
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        assert!(serde_json::from_str::<ModelArtifact>(r#"{"kind":"svm"}"#).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ridge.json");
        let artifact = ModelArtifact::Ridge(LinearArtifact {
            feature_names: None,
            intercept: 2.0,
            coefficients: vec![0.1, 0.2, 0.3, 0.4],
            alpha: Some(1.0),
        });
        save_artifact(&artifact, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let model = load_artifact(&path).unwrap();
        // 2 + 0.1*50 + 0.2*80 + 0.3*60 + 0.4*120
        assert!((model.predict(&reading()) - 89.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_artifact(&missing), Err(ArtifactError::Missing(_))));

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, b"\x80\x04not json").unwrap();
        assert!(matches!(load_artifact(&corrupt), Err(ArtifactError::Parse { .. })));
    }
}
