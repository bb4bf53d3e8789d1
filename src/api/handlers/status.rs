//! Liveness endpoint

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use super::DashboardState;
use crate::api::envelope::ApiResponse;

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" with at least one model loaded, "degraded" otherwise
    pub status: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub models_loaded: usize,
    pub models_configured: usize,
}

/// GET /health - Liveness plus loaded model count
pub async fn health_check(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(health_report(&state))
}

fn health_report(state: &DashboardState) -> HealthResponse {
    let models_loaded = state.registry.len();
    HealthResponse {
        status: if models_loaded > 0 { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_secs(),
        models_loaded,
        models_configured: state.registry.statuses().len(),
    }
}
