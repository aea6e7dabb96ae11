//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{change, health};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Operational probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Coin change API
    let change_routes = Router::new()
        .route("/calculate", post(change::calculate))
        .route("/health", get(change::health))
        .route("/valid-denominations", get(change::valid_denominations));

    // The service fronts a browser client, so CORS stays open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .nest("/api/v1/coin-change", change_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
