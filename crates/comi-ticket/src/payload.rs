//! Ticket requests and the payload encoded into the QR symbol.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TicketError, TicketResult};

/// Provider tag stamped on every ticket.
pub const PROVIDER: &str = "ComiOnline";

/// Prefix of generated references.
pub const REFERENCE_PREFIX: char = 'C';

const REQUIRED_MESSAGE: &str = "name and amount are required";

/// Ticket request as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Name of the payer.
    #[serde(default)]
    pub name: Option<Value>,
    /// Amount to pay; echoed into the payload exactly as given.
    #[serde(default)]
    pub amount: Option<Value>,
    /// Caller-chosen reference. Generated when absent.
    #[serde(default)]
    pub reference: Option<Value>,
}

/// Data carried by a ticket's QR symbol.
///
/// Field order is part of the encoded text: provider, name, amount, reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketPayload {
    /// Always [`PROVIDER`].
    pub provider: String,
    /// Name of the payer, as given.
    pub name: Value,
    /// Amount to pay, as given.
    pub amount: Value,
    /// Ticket reference: the caller's value, or a generated `C<millis>` string.
    pub reference: Value,
}

impl TicketPayload {
    /// Builds a payload, generating a reference from the current time if needed.
    pub fn build(request: TicketRequest) -> TicketResult<Self> {
        Self::build_at(request, chrono::Utc::now().timestamp_millis())
    }

    /// Builds a payload using `now_millis` (Unix epoch milliseconds) for a
    /// generated reference.
    pub fn build_at(request: TicketRequest, now_millis: i64) -> TicketResult<Self> {
        let (Some(name), Some(amount)) = (truthy(request.name), truthy(request.amount)) else {
            return Err(TicketError::Validation(REQUIRED_MESSAGE.into()));
        };
        let reference = truthy(request.reference)
            .unwrap_or_else(|| Value::String(generated_reference(now_millis)));

        Ok(Self {
            provider: PROVIDER.to_string(),
            name,
            amount,
            reference,
        })
    }

    /// JSON text encoded into the QR symbol.
    pub fn to_json(&self) -> TicketResult<String> {
        serde_json::to_string(self).map_err(|e| TicketError::Encoding(e.to_string()))
    }
}

/// `C` followed by the epoch milliseconds.
#[must_use]
pub fn generated_reference(now_millis: i64) -> String {
    format!("{}{}", REFERENCE_PREFIX, now_millis)
}

/// Keeps a loosely typed field only if it is present: null, false, zero
/// and "" count as absent.
fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
