//! Ticket error types.

use thiserror::Error;

/// Ticket operation result type.
pub type TicketResult<T> = Result<T, TicketError>;

/// Ticket error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// Request is missing a required field or carries a malformed one.
    #[error("{0}")]
    Validation(String),

    /// The payload could not be turned into an image.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl TicketError {
    /// Returns true if the error was caused by caller input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
