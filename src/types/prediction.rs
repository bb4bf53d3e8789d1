//! Prediction output

use serde::Serialize;

use super::AqiCategory;

/// A single model prediction and the band it falls into.
///
/// Created once per request and discarded after the response is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub value: f64,
    pub category: AqiCategory,
}
