//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `config` - Server configuration shared with the handlers
pub fn create_router(config: ServerConfig) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        // Loans
        .route("/api/calculate", post(handlers::calculate_loan))
        .route("/api/schedule-csv", post(handlers::schedule_csv))
        // Tickets
        .route("/api/generate-ticket", post(handlers::generate_ticket))
        // State
        .with_state(state)
}
