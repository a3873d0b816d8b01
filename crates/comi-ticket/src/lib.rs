//! # Comi Ticket
//!
//! Synthetic payment tickets for Comi.
//!
//! A ticket is a small JSON payload (`provider`, `name`, `amount`, `reference`)
//! rendered as a scannable QR code and returned as a PNG data URL.
//!
//! ```rust
//! use comi_ticket::{generate_ticket, QrOptions, TicketRequest};
//! use serde_json::json;
//!
//! let request: TicketRequest = serde_json::from_value(json!({
//!     "name": "Alice",
//!     "amount": 50
//! })).unwrap();
//!
//! let ticket = generate_ticket(request, &QrOptions::default()).unwrap();
//! assert!(ticket.qr_data_url.starts_with("data:image/png;base64,"));
//! assert!(ticket.payload.reference.as_str().unwrap().starts_with('C'));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod payload;
pub mod qr;

use serde::{Deserialize, Serialize};

pub use error::{TicketError, TicketResult};
pub use payload::{TicketPayload, TicketRequest, PROVIDER};
pub use qr::{encode_data_url, QrOptions};

/// A rendered ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// PNG of the QR symbol as a data URL.
    pub qr_data_url: String,
    /// The data encoded in the symbol.
    pub payload: TicketPayload,
}

/// Validates a request, builds its payload and renders the QR code.
pub fn generate_ticket(request: TicketRequest, options: &QrOptions) -> TicketResult<Ticket> {
    let payload = TicketPayload::build(request)?;
    let qr_data_url = encode_data_url(&payload, options)?;
    Ok(Ticket {
        qr_data_url,
        payload,
    })
}
