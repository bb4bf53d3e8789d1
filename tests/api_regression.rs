//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! all /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port. Models are loaded from the artifacts
//! shipped in `models/`.

use aqi_dashboard::api::{create_app, DashboardState};
use aqi_dashboard::config::DashboardConfig;
use aqi_dashboard::models::ModelRegistry;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::path::PathBuf;
use tower::ServiceExt;

fn shipped_models_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models")
}

fn create_test_app() -> Router {
    let mut config = DashboardConfig::default();
    config.models.dir = shipped_models_dir();
    let registry = ModelRegistry::load_all(&config.models.dir, &config.models.entries);
    create_app(DashboardState::new(registry, config))
}

async fn get(uri: &str) -> axum::response::Response {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(uri: &str, body: serde_json::Value) -> axum::response::Response {
    create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// All v1 GET endpoints should return 200.
#[tokio::test]
async fn test_v1_get_endpoints_return_200() {
    let endpoints = [
        "/api/v1/models",
        "/api/v1/inputs",
        "/api/v1/comparison",
        "/api/v1/categories",
        "/api/v1/pollutants",
    ];

    for endpoint in &endpoints {
        let resp = get(endpoint).await;
        assert!(
            resp.status().is_success(),
            "GET {endpoint} returned status {}",
            resp.status()
        );
        let json = json_body(resp).await;
        assert!(json.get("data").is_some(), "{endpoint} missing data envelope");
        assert!(json.get("meta").is_some(), "{endpoint} missing meta envelope");
    }
}

/// All four shipped artifacts load.
#[tokio::test]
async fn test_health_counts_shipped_models() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["models_loaded"], 4);
    assert_eq!(json["data"]["models_configured"], 4);
}

#[tokio::test]
async fn test_models_listed_in_dashboard_order() {
    let json = json_body(get("/api/v1/models").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["XGBoost Regressor", "Linear Regression", "Lasso Regression", "Ridge Regression"]
    );
    assert!(json["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["available"] == true));
}

#[tokio::test]
async fn test_models_expose_fitted_parameters() {
    let json = json_body(get("/api/v1/models").await).await;
    let models = json["data"].as_array().unwrap();
    assert_eq!(models[0]["parameters"]["n_trees"], 3);
    assert!(models[0]["parameters"].get("alpha").is_none());
    assert_eq!(models[2]["parameters"]["alpha"], 0.1);
    assert_eq!(models[2]["parameters"]["zeroed_features"], 1);
    assert_eq!(models[3]["parameters"]["alpha"], 1.0);
    assert_eq!(models[1]["parameters"]["coefficients"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_inputs_carry_slider_defaults() {
    let json = json_body(get("/api/v1/inputs").await).await;
    let sliders = json["data"].as_array().unwrap();
    assert_eq!(sliders.len(), 4);
    assert_eq!(sliders[0]["key"], "co");
    assert_eq!(sliders[0]["max"], 300.0);
    assert_eq!(sliders[3]["key"], "pm25");
    assert_eq!(sliders[3]["default"], 120.0);
}

/// Default slider values through every shipped model land in a sane band.
#[tokio::test]
async fn test_predict_with_each_shipped_model() {
    for model in [
        "XGBoost Regressor",
        "Linear Regression",
        "Lasso Regression",
        "Ridge Regression",
    ] {
        let resp = post_json(
            "/api/v1/predict",
            serde_json::json!({"model": model, "co": 50, "no2": 60, "ozone": 80, "pm25": 120}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK, "predict with {model}");

        let json = json_body(resp).await;
        let prediction = json["data"]["prediction"].as_f64().unwrap();
        assert!(
            (100.0..=150.0).contains(&prediction),
            "{model} predicted {prediction}"
        );
        assert_eq!(json["data"]["category"]["id"], "UnhealthySensitive");
        assert_eq!(json["data"]["gauge"]["bands"].as_array().unwrap().len(), 6);
    }
}

#[tokio::test]
async fn test_predict_unknown_model_returns_404_envelope() {
    let resp = post_json(
        "/api/v1/predict",
        serde_json::json!({"model": "Random Forest", "co": 1, "no2": 1, "ozone": 1, "pm25": 1}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "MODEL_NOT_FOUND");
}

#[tokio::test]
async fn test_predict_malformed_body_returns_400_envelope() {
    let resp = post_json("/api/v1/predict", serde_json::json!({"model": "Ridge Regression"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_report_download() {
    let resp = get(
        "/api/v1/report?model=Ridge%20Regression&co=50&no2=60&ozone=80&pm25=120",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"AQI_Prediction_Report.txt\""
    );

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Selected Model: Ridge Regression"));
    assert!(text.contains("- PM2.5 AQI Value: 120"));
    assert!(text.contains("Unhealthy (Sensitive)"));
}

#[tokio::test]
async fn test_categories_cover_scale() {
    let json = json_body(get("/api/v1/categories").await).await;
    let scale = json["data"].as_array().unwrap();
    assert_eq!(scale.len(), 6);
    assert_eq!(scale[0]["label"], "Good");
    assert_eq!(scale[0]["upper"], 50.0);
    assert_eq!(scale[5]["label"], "Hazardous");
    assert!(scale[5]["upper"].is_null());
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let resp = get("/api/v1/does-not-exist").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"]["code"], "NOT_FOUND");
}

/// Non-API paths fall back to the dashboard.
#[tokio::test]
async fn test_dashboard_served_at_root_and_fallback() {
    for uri in ["/", "/comparison"] {
        let resp = get(uri).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        assert!(resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    let resp = get("/app.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .contains("javascript"));
}
