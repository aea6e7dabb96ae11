//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::domain::{HealthResponse, ReadyComponents, ReadyResponse};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "coin-change-calculator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe - runs an engine smoke test.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let engine_ok = state.change_service.self_check();

    let status_code = if engine_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = Json(ReadyResponse {
        ready: engine_ok,
        components: ReadyComponents { engine: engine_ok },
    });

    (status_code, response)
}

/// Plain-text metrics endpoint.
pub async fn metrics() -> String {
    let mut output = String::new();

    output.push_str("# HELP changemaker_up Whether the service is up\n");
    output.push_str("# TYPE changemaker_up gauge\n");
    output.push_str("changemaker_up 1\n");

    output
}
