//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use comi_core::{
    build_schedule, calculate, schedule_to_csv, CalculationResult, LoanRequest, CSV_CONTENT_TYPE,
    CSV_FILENAME,
};
use comi_ticket::{Ticket, TicketRequest};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Application state.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// LOAN CALCULATION
// =============================================================================

/// Calculate the monthly payment, totals and full schedule.
pub async fn calculate_loan(
    body: Result<Json<LoanRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(request) = body?;
    let terms = request.into_terms()?;
    Ok(Json(calculate(&terms)))
}

/// Download the schedule as CSV.
pub async fn schedule_csv(
    body: Result<Json<LoanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let terms = request.into_terms()?;
    let schedule = build_schedule(terms.principal(), terms.annual_rate_pct(), terms.months());
    let csv = schedule_to_csv(&schedule)?;

    debug!("exported {} schedule rows as CSV", schedule.len());

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", CSV_FILENAME),
            ),
        ],
        csv,
    ))
}

// =============================================================================
// PAYMENT TICKETS
// =============================================================================

/// Build a ticket payload and render it as a QR data URL.
pub async fn generate_ticket(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TicketRequest>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let Json(request) = body?;
    let ticket = comi_ticket::generate_ticket(request, &state.config.qr_options())?;

    debug!("generated ticket {}", ticket.payload.reference);

    Ok(Json(ticket))
}
