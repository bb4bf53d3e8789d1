//! Pre-trained regression models
//!
//! Training happens offline. This module only loads serialized artifacts and
//! evaluates them:
//!
//! - [`Predictor`]: the single-method capability every model variant satisfies
//! - [`linear`]: ordinary least squares, Lasso and Ridge (shared linear form)
//! - [`boosted`]: gradient-boosted regression trees (XGBoost export)
//! - [`artifact`]: on-disk JSON format and load/save
//! - [`registry`]: name → loaded model lookup, populated once at startup

pub mod artifact;
pub mod boosted;
pub mod linear;
pub mod registry;

pub use artifact::{load_artifact, save_artifact, ArtifactError, ModelArtifact};
pub use boosted::XgbRegressor;
pub use linear::{LassoRegressor, LinearCoefficients, LinearRegressor, RidgeRegressor};
pub use registry::{ModelHandle, ModelRegistry, ModelStatus};

use serde::Serialize;

use crate::types::PollutantReading;

/// A loaded regression model.
///
/// Implementations build their feature vector with
/// [`PollutantReading::model_features`] so the training column order is
/// honored. No bounds checking: inputs outside the training range are
/// extrapolated.
pub trait Predictor: Send + Sync + std::fmt::Debug {
    /// Estimate the overall AQI for one reading.
    fn predict(&self, reading: &PollutantReading) -> f64;

    /// Algorithm name shown in the model list.
    fn algorithm(&self) -> &'static str;

    /// Fitted parameters worth showing next to the model.
    fn parameters(&self) -> ModelParameters {
        ModelParameters::default()
    }
}

/// Summary of a fitted model. Fields that do not apply to a model family
/// stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercept: Option<f64>,
    /// Weights in model feature order (CO, Ozone, NO₂, PM2.5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Lasso only: weights driven to exactly zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroed_features: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_trees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_nodes: Option<usize>,
}
