//! Model list and input slider endpoints

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use super::DashboardState;
use crate::api::envelope::ApiResponse;
use crate::comparison::{comparison_for, ComparisonRow};
use crate::config::SliderRange;
use crate::models::ModelParameters;
use crate::types::Pollutant;

/// One entry of `GET /api/v1/models`.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
    /// Fitted parameters of a loaded model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ModelParameters>,
    /// Offline evaluation figures, when the model was evaluated
    pub metrics: Option<&'static ComparisonRow>,
}

/// GET /api/v1/models - Every configured model with availability
pub async fn list_models(State(state): State<DashboardState>) -> Response {
    let models: Vec<ModelSummary> = state
        .registry
        .statuses()
        .iter()
        .map(|status| ModelSummary {
            name: status.name.clone(),
            available: status.loaded,
            algorithm: status.algorithm,
            unavailable_reason: status.reason.clone(),
            parameters: status.parameters.clone(),
            metrics: comparison_for(&status.name),
        })
        .collect();
    ApiResponse::ok(models)
}

/// One slider of `GET /api/v1/inputs`.
#[derive(Debug, Serialize)]
pub struct InputSlider {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputSlider {
    fn new(pollutant: Pollutant, range: SliderRange) -> Self {
        Self {
            key: pollutant.key(),
            label: pollutant.label(),
            min: 0.0,
            max: range.max,
            default: range.default,
        }
    }
}

/// GET /api/v1/inputs - Slider ranges and defaults, in display order
pub async fn input_sliders(State(state): State<DashboardState>) -> Response {
    let sliders: Vec<InputSlider> = Pollutant::ALL
        .into_iter()
        .map(|p| InputSlider::new(p, state.config.inputs.range_for(p)))
        .collect();
    ApiResponse::ok(sliders)
}
