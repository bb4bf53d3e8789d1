//! AQI Predictor Dashboard
//!
//! Predicts the overall Air Quality Index from four pollutant sub-indices
//! with pre-trained regression models, classifies the result into the six
//! AQI bands and serves everything to a browser dashboard.
//!
//! ## Architecture
//!
//! - **Models**: JSON artifacts loaded once into an immutable [`ModelRegistry`]
//! - **Classifier**: declarative band table mapping AQI values to categories
//! - **Report**: plain-text prediction summary offered as a download
//! - **API**: axum router plus the embedded dashboard

pub mod api;
pub mod classifier;
pub mod comparison;
pub mod config;
pub mod error;
pub mod gauge;
pub mod models;
pub mod pollutants;
pub mod predict;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::DashboardConfig;

// Re-export commonly used types
pub use types::{AqiCategory, Pollutant, PollutantReading, PredictionResult};

// Re-export the core operations
pub use classifier::classify;
pub use comparison::{comparison_rows, ComparisonRow};
pub use error::AqiError;
pub use models::{ModelRegistry, Predictor};
pub use predict::predict;
pub use report::format_report;
