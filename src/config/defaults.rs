//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Server
// ============================================================================

/// HTTP bind address when neither config nor CLI sets one.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Maximum accepted request body (bytes). Prediction requests are tiny.
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

// ============================================================================
// Models
// ============================================================================

/// Directory searched for model artifacts, relative to the working directory.
pub const MODELS_DIR: &str = "models";

/// Known models as (display name, artifact file), in dashboard order.
pub const MODEL_FILES: [(&str, &str); 4] = [
    ("XGBoost Regressor", "best_model.json"),
    ("Linear Regression", "linear_regression.json"),
    ("Lasso Regression", "lasso.json"),
    ("Ridge Regression", "ridge.json"),
];

// ============================================================================
// Input Sliders
// ============================================================================

/// CO sub-index slider: max, default.
pub const CO_MAX: f64 = 300.0;
pub const CO_DEFAULT: f64 = 50.0;

/// NO₂ sub-index slider: max, default.
pub const NO2_MAX: f64 = 400.0;
pub const NO2_DEFAULT: f64 = 60.0;

/// Ozone sub-index slider: max, default.
pub const OZONE_MAX: f64 = 300.0;
pub const OZONE_DEFAULT: f64 = 80.0;

/// PM2.5 sub-index slider: max, default.
pub const PM25_MAX: f64 = 500.0;
pub const PM25_DEFAULT: f64 = 120.0;

// ============================================================================
// Report & Gauge
// ============================================================================

/// Download file name for the plain-text report.
pub const REPORT_FILE_NAME: &str = "AQI_Prediction_Report.txt";

/// MIME type of the report download.
pub const REPORT_MIME: &str = "text/plain; charset=utf-8";

/// Upper end of the gauge axis.
pub const GAUGE_MAX: f64 = 500.0;
