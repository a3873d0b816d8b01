//! # Comi Core
//!
//! Fixed-rate loan amortization with decimal precision.
//!
//! - **Types**: [`LoanTerms`], [`PaymentRow`], [`Schedule`], [`CalculationResult`]
//! - **Amortization**: the annuity payment, the month-by-month schedule and its totals
//! - **Validation**: building loan terms from loosely typed request input
//! - **Export**: CSV rendering of a schedule
//!
//! Calculations are pure functions of their inputs and hold no state between calls.
//!
//! ## Example
//!
//! ```rust
//! use comi_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms::new(dec!(100000), dec!(6), 360).unwrap();
//! let result = calculate(&terms);
//!
//! assert_eq!(result.monthly_payment, dec!(599.55));
//! assert_eq!(result.schedule.len(), 360);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

pub mod amortization;
pub mod error;
pub mod export;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{
        build_schedule, build_schedule_with_payment, calculate, monthly_payment, monthly_rate,
        summarize,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::export::schedule_to_csv;
    pub use crate::types::{
        round_money, CalculationResult, LoanSummary, LoanTerms, PaymentRow, Schedule,
    };
    pub use crate::validation::LoanRequest;
}

// Re-export commonly used items at crate root
pub use amortization::{build_schedule, calculate, monthly_payment, summarize};
pub use error::{CoreError, CoreResult};
pub use export::{schedule_to_csv, CSV_CONTENT_TYPE, CSV_FILENAME};
pub use types::{CalculationResult, LoanSummary, LoanTerms, PaymentRow, Schedule};
pub use validation::LoanRequest;
