//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::service::ChangeService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Change calculation service.
    pub change_service: Arc<ChangeService>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured denomination set is invalid.
    pub fn new(config: Arc<AppConfig>) -> Result<Self> {
        let change_service = Arc::new(ChangeService::new(&config.engine)?);

        Ok(Self {
            config,
            change_service,
        })
    }
}
