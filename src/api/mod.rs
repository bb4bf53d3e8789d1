//! REST API module using Axum
//!
//! Provides HTTP endpoints for the AQI predictor dashboard:
//! - v1 API with a consistent `{data, meta}` envelope
//! - Dashboard (HTML/JS/CSS) served via `rust-embed` (compiled into the binary)

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::DashboardState;

use axum::extract::{DefaultBodyLimit, OriginalUri};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use rust_embed::Embed;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::defaults::MAX_REQUEST_BODY_BYTES;

/// Environment variable listing extra allowed CORS origins.
pub const CORS_ENV_VAR: &str = "AQI_CORS_ORIGINS";

/// Dashboard assets from `dashboard/`.
#[derive(Embed)]
#[folder = "dashboard/"]
struct DashboardAssets;

/// Serve a static asset or fall back to `index.html` for client-side views.
///
/// Uses the original URI: nested routers hand their fallback a prefix-stripped path.
async fn serve_asset(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact file match first.
    if let Some(content) = DashboardAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // Unknown API paths get a JSON 404, not the dashboard.
    if path.starts_with("api/") {
        return envelope::ApiErrorResponse::not_found(format!("No route for /{path}"));
    }

    if let Some(index) = DashboardAssets::get("index.html") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            index.data.into_owned(),
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "Dashboard assets missing from this build.").into_response()
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `AQI_CORS_ORIGINS` to a comma-separated list of allowed origins
/// for development (e.g., `http://localhost:5173`), or `*` for any origin.
fn build_cors_layer() -> CorsLayer {
    cors_layer_for(std::env::var(CORS_ENV_VAR).ok().as_deref())
}

fn cors_layer_for(origins: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let Some(origins) = origins else {
        // No cross-origin allowed; the dashboard is same-origin
        return base;
    };

    // AllowOrigin::list panics on a wildcard entry
    if origins.split(',').any(|o| o.trim() == "*") {
        tracing::warn!(origins = %origins, "CORS: wildcard configured, allowing any origin");
        return base.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "CORS: ignoring unparseable origin");
                None
            }
        })
        .collect();
    tracing::info!(origins = %origins, "CORS: allowing configured origins");
    base.allow_origin(allowed)
}

/// Create the complete application router with API and dashboard serving.
pub fn create_app(state: DashboardState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::root_routes(state))
        .fallback(serve_asset)
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
