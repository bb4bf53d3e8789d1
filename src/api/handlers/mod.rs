//! API route handlers
//!
//! Request handling logic for all API endpoints including:
//! - Liveness and model availability
//! - Predictions, gauge data and report downloads
//! - Static reference data (comparison, AQI scale, pollutants)

mod models;
mod predict;
mod reference;
mod status;

pub use models::*;
pub use predict::*;
pub use reference::*;
pub use status::*;

use std::sync::Arc;
use std::time::Instant;

use crate::config::DashboardConfig;
use crate::models::ModelRegistry;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers. Everything behind it is read-only.
#[derive(Clone)]
pub struct DashboardState {
    /// Models loaded at startup
    pub registry: Arc<ModelRegistry>,
    /// Configuration the server was started with
    pub config: Arc<DashboardConfig>,
    /// Server start, for uptime reporting
    pub started_at: Instant,
}

impl DashboardState {
    pub fn new(registry: ModelRegistry, config: DashboardConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::{LinearCoefficients, Predictor, RidgeRegressor};

    /// State with a single ridge model whose output is `intercept + pm25`.
    pub fn state_with_ridge(intercept: f64) -> DashboardState {
        let ridge: Arc<dyn Predictor> = Arc::new(RidgeRegressor::new(
            LinearCoefficients {
                intercept,
                coefficients: [0.0, 0.0, 0.0, 1.0],
            },
            Some(1.0),
        ));
        DashboardState::new(
            ModelRegistry::from_predictors([("Ridge Regression", ridge)]),
            DashboardConfig::default(),
        )
    }
}
