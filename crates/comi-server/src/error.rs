//! API error type and its HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use comi_core::CoreError;
use comi_ticket::TicketError;

/// Error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request is malformed or missing required fields (400).
    #[error("{0}")]
    Validation(String),

    /// QR image generation failed (500). Carries the underlying cause.
    #[error("QR generation failed")]
    Encoding(String),

    /// Any other server-side failure (500).
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Encoding(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Encoding(cause) => error!("QR generation failed: {}", cause),
            Self::Internal(cause) => error!("Request failed: {}", cause),
            Self::Validation(_) => {}
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_validation() {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        match err {
            TicketError::Validation(message) => Self::Validation(message),
            TicketError::Encoding(cause) => Self::Encoding(cause),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
