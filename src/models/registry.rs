//! Model registry: display name → loaded predictor
//!
//! Populated once at startup from the configured model entries and read-only
//! afterwards. A missing or corrupt artifact only removes that model; the
//! others stay usable.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use super::{load_artifact, ModelParameters, Predictor};
use crate::config::ModelEntry;
use crate::error::AqiError;
use crate::types::PollutantReading;

/// A successfully loaded model.
#[derive(Debug, Clone)]
pub struct ModelHandle {
    pub name: String,
    pub artifact_path: PathBuf,
    pub loaded: bool,
    predictor: Arc<dyn Predictor>,
}

impl ModelHandle {
    pub fn predict(&self, reading: &PollutantReading) -> f64 {
        self.predictor.predict(reading)
    }

    pub fn algorithm(&self) -> &'static str {
        self.predictor.algorithm()
    }
}

/// Availability of one configured model, for the model list.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub name: String,
    pub artifact_path: PathBuf,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<&'static str>,
    /// Why the artifact was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ModelParameters>,
}

/// Immutable set of loaded models, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    handles: Vec<ModelHandle>,
    statuses: Vec<ModelStatus>,
}

impl ModelRegistry {
    /// Load every configured entry from `dir`, skipping the ones that fail.
    pub fn load_all(dir: &Path, entries: &[ModelEntry]) -> Self {
        let mut registry = Self::default();

        for entry in entries {
            let path = dir.join(&entry.file);

            if registry.contains(&entry.name) {
                warn!(model = %entry.name, "Duplicate model entry, keeping the first");
                continue;
            }

            match load_artifact(&path) {
                Ok(predictor) => {
                    info!(
                        model = %entry.name,
                        path = %path.display(),
                        algorithm = predictor.algorithm(),
                        "✓ Model loaded"
                    );
                    registry.insert(&entry.name, path, predictor);
                }
                Err(e) => {
                    warn!(model = %entry.name, error = %e, "Model unavailable, skipping");
                    registry.statuses.push(ModelStatus {
                        name: entry.name.clone(),
                        artifact_path: path,
                        loaded: false,
                        algorithm: None,
                        reason: Some(e.to_string()),
                        parameters: None,
                    });
                }
            }
        }

        info!(
            loaded = registry.len(),
            configured = entries.len(),
            "Model registry ready"
        );
        registry
    }

    /// Build a registry from predictors that are already in memory.
    pub fn from_predictors<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn Predictor>)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for (name, predictor) in models {
            let name = name.into();
            if !registry.contains(&name) {
                registry.insert(&name, PathBuf::new(), predictor);
            }
        }
        registry
    }

    fn insert(&mut self, name: &str, artifact_path: PathBuf, predictor: Arc<dyn Predictor>) {
        self.statuses.push(ModelStatus {
            name: name.to_string(),
            artifact_path: artifact_path.clone(),
            loaded: true,
            algorithm: Some(predictor.algorithm()),
            reason: None,
            parameters: Some(predictor.parameters()),
        });
        self.handles.push(ModelHandle {
            name: name.to_string(),
            artifact_path,
            loaded: true,
            predictor,
        });
    }

    fn contains(&self, name: &str) -> bool {
        self.statuses.iter().any(|s| s.name == name)
    }

    /// Look up a loaded model by display name.
    pub fn get(&self, name: &str) -> Result<&ModelHandle, AqiError> {
        self.handles
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| AqiError::model_not_found(name))
    }

    /// Every configured model, loaded or not.
    pub fn statuses(&self) -> &[ModelStatus] {
        &self.statuses
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
