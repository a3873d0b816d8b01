//! Error types for the Comi calculator.
//!
//! The calculator itself is infallible for validated terms; errors come from
//! turning caller input into [`LoanTerms`](crate::LoanTerms) and from
//! serializing a schedule.

use thiserror::Error;

/// A specialized Result type for Comi core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for Comi core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// One of the required loan fields is absent, or is a zero principal/term.
    #[error("principal, annualRatePct and months are required")]
    MissingLoanFields,

    /// A loan field is present but outside its domain.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Wire name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Schedule could not be serialized.
    #[error("Export error: {reason}")]
    Export {
        /// Description of the failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an export error.
    #[must_use]
    pub fn export(reason: impl Into<String>) -> Self {
        Self::Export {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by caller input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingLoanFields | Self::InvalidField { .. })
    }
}
