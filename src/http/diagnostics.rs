//! Service-level routes: banner, health, fault injection, metrics scrape.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{info_span, Instrument};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Bookly API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API is running smoothly",
    }))
}

/// GET /error. Fails with a server fault per the injected policy
/// (roughly half the time under the default policy). The span is marked as
/// an error unconditionally; this route exists to light up dashboards.
pub async fn simulate_error(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let span = info_span!(
        "simulate_error",
        error = true,
        error.kind = "SimulatedError",
        error.message = "This is a simulated error",
    );
    async move {
        if state.fault.should_fail() {
            Err(ApiError::SimulatedFault)
        } else {
            Ok(Json(json!({ "message": "No error this time!" })))
        }
    }
    .instrument(span)
    .await
}

/// GET /metrics. Exposition-format dump of everything accumulated so far.
/// Does not reset anything; the middleware measures this route like any
/// other (its own sample lands after the body has been rendered).
pub async fn export_metrics(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response()
        }
    }
}
