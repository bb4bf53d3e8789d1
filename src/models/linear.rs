//! Linear regression family: OLS, Lasso (L1) and Ridge (L2)
//!
//! The three differ only in how the coefficients were fitted; at inference
//! time each is `intercept + Σ coefᵢ · xᵢ`.

use serde::{Deserialize, Serialize};

use super::{ModelParameters, Predictor};
use crate::types::PollutantReading;

/// Fitted linear form shared by the linear regressors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCoefficients {
    pub intercept: f64,
    /// One weight per feature, in model feature order (CO, Ozone, NO₂, PM2.5).
    pub coefficients: [f64; 4],
}

impl LinearCoefficients {
    pub fn evaluate(&self, features: &[f64; 4]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }

    fn parameters(&self, alpha: Option<f64>) -> ModelParameters {
        ModelParameters {
            intercept: Some(self.intercept),
            coefficients: Some(self.coefficients),
            alpha,
            ..ModelParameters::default()
        }
    }
}

/// Ordinary least squares regression.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    weights: LinearCoefficients,
}

impl LinearRegressor {
    pub fn new(weights: LinearCoefficients) -> Self {
        Self { weights }
    }
}

impl Predictor for LinearRegressor {
    fn predict(&self, reading: &PollutantReading) -> f64 {
        self.weights.evaluate(&reading.model_features())
    }

    fn algorithm(&self) -> &'static str {
        "Ordinary least squares"
    }

    fn parameters(&self) -> ModelParameters {
        self.weights.parameters(None)
    }
}

/// L1-regularized linear regression.
#[derive(Debug, Clone)]
pub struct LassoRegressor {
    weights: LinearCoefficients,
    /// Regularization strength used at training time, if recorded.
    alpha: Option<f64>,
}

impl LassoRegressor {
    pub fn new(weights: LinearCoefficients, alpha: Option<f64>) -> Self {
        Self { weights, alpha }
    }

    /// Features the L1 penalty drove to exactly zero.
    fn zeroed_features(&self) -> usize {
        self.weights
            .coefficients
            .iter()
            .filter(|w| **w == 0.0)
            .count()
    }
}

impl Predictor for LassoRegressor {
    fn predict(&self, reading: &PollutantReading) -> f64 {
        self.weights.evaluate(&reading.model_features())
    }

    fn algorithm(&self) -> &'static str {
        "Lasso (L1) regression"
    }

    fn parameters(&self) -> ModelParameters {
        ModelParameters {
            zeroed_features: Some(self.zeroed_features()),
            ..self.weights.parameters(self.alpha)
        }
    }
}

/// L2-regularized linear regression.
#[derive(Debug, Clone)]
pub struct RidgeRegressor {
    weights: LinearCoefficients,
    alpha: Option<f64>,
}

impl RidgeRegressor {
    pub fn new(weights: LinearCoefficients, alpha: Option<f64>) -> Self {
        Self { weights, alpha }
    }
}

impl Predictor for RidgeRegressor {
    fn predict(&self, reading: &PollutantReading) -> f64 {
        self.weights.evaluate(&reading.model_features())
    }

    fn algorithm(&self) -> &'static str {
        "Ridge (L2) regression"
    }

    fn parameters(&self) -> ModelParameters {
        self.weights.parameters(self.alpha)
    }
}
