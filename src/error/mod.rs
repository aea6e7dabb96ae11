//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code
//! mapping and the `{ "error": kind, "message": text }` API error shape.

pub mod kind;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::ErrorResponse;

pub use kind::{ErrorCategory, ErrorKind};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Amount out of range, non-finite, or wrong precision.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Denomination non-positive, non-finite, duplicate, or not accepted.
    #[error("Invalid denomination: {0}")]
    InvalidDenomination(String),

    /// No denominations supplied.
    #[error("At least one denomination must be provided")]
    EmptyDenominationSet,

    /// No exact combination of the denominations sums to the amount.
    ///
    /// A legitimate computed outcome, not a fault: the request was well
    /// formed, the amount just has no representation in the given set.
    #[error("Cannot make the target amount with the given denominations")]
    Infeasible,

    /// Internal engine error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the machine-readable kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAmount(_) => ErrorKind::INVALID_AMOUNT,
            Self::InvalidDenomination(_) => ErrorKind::INVALID_DENOMINATION,
            Self::EmptyDenominationSet => ErrorKind::EMPTY_DENOMINATION_SET,
            Self::Infeasible => ErrorKind::INFEASIBLE,
            Self::Internal(_) => ErrorKind::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAmount(_)
            | Self::InvalidDenomination(_)
            | Self::EmptyDenominationSet => StatusCode::BAD_REQUEST,
            Self::Infeasible => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();
        let message = self.to_string();

        match kind.category() {
            ErrorCategory::Internal => {
                tracing::error!(error = %kind, status = %status, message = %message, "Request failed");
            }
            _ => {
                tracing::warn!(error = %kind, status = %status, message = %message, "Request rejected");
            }
        }

        let body = Json(ErrorResponse {
            error: kind.as_str().to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
