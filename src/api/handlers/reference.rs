//! Static reference endpoints: model comparison, AQI scale, pollutants

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use super::DashboardState;
use crate::api::envelope::ApiResponse;
use crate::classifier::band_ranges;
use crate::comparison::{best_by_rmse, comparison_rows, ComparisonRow};
use crate::pollutants::{pollutant_reference, REDUCTION_TIPS};
use crate::types::AqiCategory;

/// Display constants for one category, as the dashboard renders them.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: AqiCategory,
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
    pub advisory: &'static str,
}

impl From<AqiCategory> for CategoryView {
    fn from(category: AqiCategory) -> Self {
        Self {
            id: category,
            label: category.label(),
            glyph: category.glyph(),
            color: category.color(),
            advisory: category.advisory(),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub rows: &'static [ComparisonRow],
    pub best_model: &'static str,
}

/// GET /api/v1/comparison - Offline evaluation metrics
pub async fn model_comparison() -> Response {
    ApiResponse::ok(ComparisonResponse {
        rows: comparison_rows(),
        best_model: best_by_rmse().model_name,
    })
}

// ============================================================================
// AQI Scale
// ============================================================================

/// One row of the AQI scale table.
#[derive(Debug, Serialize)]
pub struct ScaleEntry {
    #[serde(flatten)]
    pub category: CategoryView,
    pub lower: f64,
    pub upper: Option<f64>,
    pub health_impact: &'static str,
}

/// GET /api/v1/categories - The six AQI bands, least severe first
pub async fn aqi_scale() -> Response {
    let scale: Vec<ScaleEntry> = band_ranges()
        .into_iter()
        .map(|range| ScaleEntry {
            category: range.category.into(),
            lower: range.lower,
            upper: range.upper,
            health_impact: range.category.health_impact(),
        })
        .collect();
    ApiResponse::ok(scale)
}

// ============================================================================
// Pollutants
// ============================================================================

/// GET /api/v1/pollutants - Pollutant reference with slider ranges
pub async fn pollutant_details(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(serde_json::json!({
        "pollutants": pollutant_reference(&state.config.inputs),
        "tips": REDUCTION_TIPS,
    }))
}
