//! # Changemaker
//!
//! A minimum coin change calculation service: given a monetary amount and a
//! set of denominations, it computes the fewest coins/banknotes that sum
//! exactly to the amount, with the per-denomination breakdown.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Changemaker Service                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌──────────────────────────┐  ┌───────────┐ │
//! │  │  API Layer  │   │       Change Engine       │  │  Domain   │ │
//! │  │  (Axum)     │ → │ normalize → solve → build │  │  DTOs     │ │
//! │  └─────────────┘   └──────────────────────────┘  └───────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine works entirely in integer minor units (cents): amounts are
//! normalized on the way in, optimized with dynamic programming, and only
//! converted back to decimals when the response is assembled.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the changemaker service.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Builds the change engine from the configured denomination set
/// 3. Starts the HTTP server
/// 4. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The configured denomination set is invalid
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Changemaker service"
    );

    // Create application state (validates the configured denomination set)
    let state = AppState::new(Arc::new(config.clone()))?;
    info!(
        max_amount = config.engine.max_amount,
        denominations = config.engine.denominations.len(),
        "Change engine initialized"
    );

    // Create router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
