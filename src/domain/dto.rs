//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

/// Request to calculate minimum change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangeRequest {
    /// Monetary amount, in major currency units.
    pub amount: f64,

    /// Denominations available for making change, in major units.
    pub denominations: Vec<f64>,
}

/// Count of pieces used for one denomination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinCount {
    /// Denomination value, in major units.
    pub denomination: f64,

    /// Number of pieces of this denomination.
    pub count: u32,
}

/// Successful calculation response.
///
/// `coins` holds one entry per denomination actually used, sorted ascending
/// by denomination; `total_coins` is the sum of all counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeResponse {
    /// Per-denomination piece counts, ascending by denomination.
    pub coins: Vec<CoinCount>,

    /// Total number of pieces.
    #[serde(rename = "totalCoins")]
    pub total_coins: u32,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,

    /// Human-readable message.
    pub message: String,
}

/// Response listing the denominations the service accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenominationsResponse {
    /// Accepted denominations, in major units.
    #[serde(rename = "validDenominations")]
    pub valid_denominations: Vec<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service name.
    pub service: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Change engine status.
    pub engine: bool,
}
