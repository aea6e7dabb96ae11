//! Coin change handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ChangeRequest, ChangeResponse, DenominationsResponse, HealthResponse};
use crate::error::Result;

/// Calculate the minimum coin change for an amount.
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<ChangeRequest>,
) -> Result<Json<ChangeResponse>> {
    let response = state.change_service.calculate(&request)?;
    Ok(Json(response))
}

/// Service-scoped health check, gating the client's calculate form.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "coin-change-calculator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the denominations the service accepts.
pub async fn valid_denominations(State(state): State<AppState>) -> Json<DenominationsResponse> {
    Json(DenominationsResponse {
        valid_denominations: state.change_service.valid_denominations().to_vec(),
    })
}
