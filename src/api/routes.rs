//! API route definitions
//!
//! Organizes endpoints for the AQI dashboard:
//! - /api/v1/models - configured models and their availability
//! - /api/v1/inputs - slider ranges and defaults
//! - /api/v1/predict - prediction, category and gauge data
//! - /api/v1/report - plain-text report download
//! - /api/v1/comparison, /categories, /pollutants - reference data

use axum::{routing::{get, post}, Router};

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/models", get(handlers::list_models))
        .route("/inputs", get(handlers::input_sliders))
        .route("/predict", post(handlers::predict_aqi))
        .route("/report", get(handlers::download_report))
        // Reference data
        .route("/comparison", get(handlers::model_comparison))
        .route("/categories", get(handlers::aqi_scale))
        .route("/pollutants", get(handlers::pollutant_details))
        .with_state(state)
}

/// Health endpoint at root level
pub fn root_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
