//! HTTP request handlers.

pub mod change;
pub mod health;
