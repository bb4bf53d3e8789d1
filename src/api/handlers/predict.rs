//! Prediction and report download endpoints

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::reference::CategoryView;
use super::DashboardState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::comparison::{comparison_for, ComparisonRow};
use crate::config::defaults::REPORT_MIME;
use crate::error::AqiError;
use crate::gauge::GaugeSpec;
use crate::predict::predict;
use crate::report::format_report;
use crate::types::{PollutantReading, PredictionResult};

/// Body of `POST /api/v1/predict`, also the query of `GET /api/v1/report`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub model: String,
    pub co: f64,
    pub no2: f64,
    pub ozone: f64,
    pub pm25: f64,
}

impl PredictRequest {
    fn reading(&self) -> Result<PollutantReading, AqiError> {
        PollutantReading::new(self.co, self.no2, self.ozone, self.pm25)
    }

    fn run(&self, state: &DashboardState) -> Result<(PollutantReading, PredictionResult), AqiError> {
        let reading = self.reading()?;
        let result = predict(&state.registry, &self.model, &reading)?;
        Ok((reading, result))
    }
}

/// What the dashboard shows in the "about this model" panel.
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub algorithm: &'static str,
    pub metrics: Option<&'static ComparisonRow>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub model: String,
    pub reading: PollutantReading,
    pub prediction: f64,
    /// Prediction rounded for display, e.g. "42.37"
    pub prediction_display: String,
    pub category: CategoryView,
    pub gauge: GaugeSpec,
    /// Inputs above the slider range; the prediction is an extrapolation
    pub warnings: Vec<String>,
    pub model_info: ModelInfo,
}

/// POST /api/v1/predict - Predict and classify the overall AQI
pub async fn predict_aqi(
    State(state): State<DashboardState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };
    let (reading, result) = match request.run(&state) {
        Ok(outcome) => outcome,
        Err(e) => return e.into_response(),
    };

    let warnings = reading
        .above_input_range(&state.config.inputs)
        .into_iter()
        .map(|p| {
            format!(
                "{} = {} is above the dashboard range (0-{}); the model is extrapolating",
                p.label(),
                reading.value(p),
                state.config.inputs.range_for(p).max
            )
        })
        .collect();

    let algorithm = match state.registry.get(&request.model) {
        Ok(model) => model.algorithm(),
        Err(e) => return e.into_response(),
    };

    ApiResponse::ok(PredictResponse {
        prediction_display: format!("{:.2}", result.value),
        prediction: result.value,
        category: result.category.into(),
        gauge: GaugeSpec::for_prediction(&result),
        warnings,
        model_info: ModelInfo {
            algorithm,
            metrics: comparison_for(&request.model),
        },
        reading,
        model: request.model,
    })
}

/// GET /api/v1/report - Plain-text report as a file download
pub async fn download_report(
    State(state): State<DashboardState>,
    query: Result<Query<PredictRequest>, QueryRejection>,
) -> Response {
    let Query(request) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };
    let (reading, result) = match request.run(&state) {
        Ok(outcome) => outcome,
        Err(e) => return e.into_response(),
    };

    let report = format_report(&request.model, &reading, &result);
    let disposition = content_disposition(&state.config.report.file_name);
    info!(model = %request.model, aqi = result.value, "Report downloaded");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(REPORT_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report,
    )
        .into_response()
}

/// Attachment header for the report, falling back to the default name when
/// the configured one is not a legal header value.
fn content_disposition(file_name: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .unwrap_or_else(|_| {
            warn!(file_name = %file_name.escape_debug(), "Report file name not usable in a header");
            HeaderValue::from_static(REPORT_ATTACHMENT_DEFAULT)
        })
}

const REPORT_ATTACHMENT_DEFAULT: &str = "attachment; filename=\"AQI_Prediction_Report.txt\"";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::state_with_ridge;

    fn request(model: &str, pm25: f64) -> PredictRequest {
        PredictRequest {
            model: model.to_string(),
            co: 50.0,
            no2: 60.0,
            ozone: 80.0,
            pm25,
        }
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_predict_returns_category_and_gauge() {
        let resp = predict_aqi(
            State(state_with_ridge(0.0)),
            Ok(Json(request("Ridge Regression", 120.0))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let v = body_json(resp).await;
        assert_eq!(v["data"]["prediction"], 120.0);
        assert_eq!(v["data"]["prediction_display"], "120.00");
        assert_eq!(v["data"]["category"]["id"], "UnhealthySensitive");
        assert_eq!(v["data"]["gauge"]["bar_color"], "#ff7e00");
        assert_eq!(v["data"]["model_info"]["metrics"]["rmse"], 6.32);
        assert!(v["data"]["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_predict_warns_above_slider_range() {
        let resp = predict_aqi(
            State(state_with_ridge(0.0)),
            Ok(Json(request("Ridge Regression", 650.0))),
        )
        .await;
        let v = body_json(resp).await;
        let warnings = v["data"]["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].as_str().unwrap().starts_with("PM2.5 AQI Value = 650"));
        assert_eq!(v["data"]["category"]["id"], "Hazardous");
    }

    #[tokio::test]
    async fn test_predict_unknown_model_is_404() {
        let resp = predict_aqi(
            State(state_with_ridge(0.0)),
            Ok(Json(request("XGBoost Regressor", 10.0))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_predict_negative_input_is_400() {
        let resp = predict_aqi(
            State(state_with_ridge(0.0)),
            Ok(Json(request("Ridge Regression", -5.0))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_report_is_attachment() {
        let resp = download_report(
            State(state_with_ridge(-77.63)),
            Ok(Query(request("Ridge Regression", 120.0))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"AQI_Prediction_Report.txt\""
        );
        assert!(resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("Ridge Regression"));
        assert!(text.contains("Predicted AQI: 42.37"));
        assert!(text.contains("Status: Good"));
    }

    #[test]
    fn test_unusable_report_name_falls_back() {
        assert_eq!(
            content_disposition("AQI\nReport.txt"),
            "attachment; filename=\"AQI_Prediction_Report.txt\""
        );
        assert_eq!(
            content_disposition("today.txt"),
            "attachment; filename=\"today.txt\""
        );
    }
}
