use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use kitty_allocator::error::AppError;
use kitty_allocator::workflows::allocation::{
    AllocationEngine, AllocationReport, AllocationRequest, InputError, Weights,
};
use serde::Deserialize;
use serde_json::json;

/// Allocation request body. Weights fall back to the service's configured weights.
#[derive(Debug, Deserialize)]
pub(crate) struct AllocationPayload {
    #[serde(flatten)]
    pub(crate) request: AllocationRequest,
    #[serde(default)]
    pub(crate) weights: Option<Weights>,
}

pub(crate) fn with_allocation_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/allocations", post(allocation_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn allocation_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AllocationPayload>,
) -> Result<Json<AllocationReport>, AppError> {
    let AllocationPayload { request, weights } = payload;

    let weights = weights.or(state.default_weights).ok_or_else(|| {
        InputError::Validation(
            "no weights supplied and none configured for the service".to_string(),
        )
    })?;

    let report = AllocationEngine::new(weights).run(&request)?;
    Ok(Json(report))
}
