//! Turning loosely typed request input into [`LoanTerms`].
//!
//! Fields arrive as arbitrary JSON. Numbers and numeric strings are both
//! accepted; `null`, absent and empty-string fields count as missing.
//! A zero principal or term also counts as missing, while a zero rate is
//! a valid interest-free loan.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::LoanTerms;

/// Raw loan input as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Amount borrowed.
    #[serde(default)]
    pub principal: Option<Value>,
    /// Annual rate in percent.
    #[serde(default)]
    pub annual_rate_pct: Option<Value>,
    /// Term in months.
    #[serde(default)]
    pub months: Option<Value>,
}

impl LoanRequest {
    /// Validates the request and builds loan terms.
    pub fn into_terms(self) -> CoreResult<LoanTerms> {
        let principal = parse_decimal("principal", self.principal.as_ref())?;
        let annual_rate_pct = parse_decimal("annualRatePct", self.annual_rate_pct.as_ref())?;
        let months = parse_decimal("months", self.months.as_ref())?;

        let (Some(principal), Some(annual_rate_pct), Some(months)) =
            (principal, annual_rate_pct, months)
        else {
            return Err(CoreError::MissingLoanFields);
        };

        LoanTerms::new(principal, annual_rate_pct, parse_months(months)?)
    }
}

/// Parses one numeric field. `Ok(None)` means the field is missing.
pub fn parse_decimal(field: &str, value: Option<&Value>) -> CoreResult<Option<Decimal>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => decimal_from_text(&n.to_string())
            .map(Some)
            .ok_or_else(|| CoreError::invalid_field(field, "is out of range")),
        Some(Value::String(s)) => {
            let text = s.trim();
            if text.is_empty() {
                return Ok(None);
            }
            decimal_from_text(text)
                .map(Some)
                .ok_or_else(|| CoreError::invalid_field(field, "must be a number"))
        }
        Some(_) => Err(CoreError::invalid_field(field, "must be a number")),
    }
}

fn decimal_from_text(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_months(months: Decimal) -> CoreResult<u32> {
    if !months.fract().is_zero() {
        return Err(CoreError::invalid_field("months", "must be a whole number"));
    }
    if months.is_sign_negative() && !months.is_zero() {
        return Err(CoreError::invalid_field("months", "must be greater than zero"));
    }
    months
        .to_u32()
        .ok_or_else(|| CoreError::invalid_field("months", "is out of range"))
}
