//! Domain models for the changemaker service.
//!
//! Contains the API contract types for the coin change endpoints.

pub mod dto;

pub use dto::{
    ChangeRequest, ChangeResponse, CoinCount, DenominationsResponse, ErrorResponse, HealthResponse,
    ReadyComponents, ReadyResponse,
};
