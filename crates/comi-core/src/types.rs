//! Value types for loan calculations.
//!
//! Everything here is transient: built per request, never persisted.

use std::slice::Iter;

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::monthly_rate;
use crate::error::{CoreError, CoreResult};

/// Number of fractional digits on every exposed money value.
pub const MONEY_DP: u32 = 2;

/// Longest accepted term, in months (100 years).
pub const MAX_MONTHS: u32 = 1200;

/// Largest accepted principal.
pub const MAX_PRINCIPAL: Decimal = dec!(1_000_000_000_000);

/// Largest accepted annual rate, in percent.
pub const MAX_ANNUAL_RATE_PCT: Decimal = dec!(10_000);

/// Largest accepted compound growth `(1 + r)^months` over the term.
///
/// Past this, rounding in the level payment is multiplied by the growth
/// factor and the schedule no longer ends at a zero balance.
pub const MAX_RATE_GROWTH: Decimal = dec!(1_000_000_000);

/// Rounds a money amount to [`MONEY_DP`] places, midpoints away from zero.
///
/// A result of zero is always positive zero, so a `-0.001` residual prints as `0`.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Validated terms of a fixed-rate loan.
///
/// # Example
///
/// ```rust
/// use comi_core::LoanTerms;
/// use rust_decimal_macros::dec;
///
/// let terms = LoanTerms::new(dec!(100000), dec!(6), 360).unwrap();
/// assert_eq!(terms.months(), 360);
/// assert!(LoanTerms::new(dec!(0), dec!(6), 360).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    principal: Decimal,
    annual_rate_pct: Decimal,
    months: u32,
}

impl LoanTerms {
    /// Creates loan terms, checking `principal > 0`, `annual_rate_pct >= 0`
    /// and `1 <= months <= MAX_MONTHS`.
    ///
    /// The rate and term together must also keep `(1 + r)^months` within
    /// [`MAX_RATE_GROWTH`], so the level payment pays the loan down.
    pub fn new(principal: Decimal, annual_rate_pct: Decimal, months: u32) -> CoreResult<Self> {
        if principal.is_zero() || months == 0 {
            return Err(CoreError::MissingLoanFields);
        }
        if principal.is_sign_negative() {
            return Err(CoreError::invalid_field("principal", "must be greater than zero"));
        }
        if principal > MAX_PRINCIPAL {
            return Err(CoreError::invalid_field(
                "principal",
                format!("must not exceed {}", MAX_PRINCIPAL),
            ));
        }
        if annual_rate_pct.is_sign_negative() && !annual_rate_pct.is_zero() {
            return Err(CoreError::invalid_field("annualRatePct", "must not be negative"));
        }
        if annual_rate_pct > MAX_ANNUAL_RATE_PCT {
            return Err(CoreError::invalid_field(
                "annualRatePct",
                format!("must not exceed {}", MAX_ANNUAL_RATE_PCT),
            ));
        }
        if months > MAX_MONTHS {
            return Err(CoreError::invalid_field(
                "months",
                format!("must not exceed {}", MAX_MONTHS),
            ));
        }
        let growth = (Decimal::ONE + monthly_rate(annual_rate_pct.abs()))
            .checked_powu(u64::from(months));
        if !growth.is_some_and(|g| g <= MAX_RATE_GROWTH) {
            return Err(CoreError::invalid_field(
                "annualRatePct",
                format!("is too large for a {}-month term", months),
            ));
        }

        Ok(Self {
            principal,
            annual_rate_pct: annual_rate_pct.abs(),
            months,
        })
    }

    /// Amount borrowed.
    #[must_use]
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Nominal annual rate in percent (6 means 6%).
    #[must_use]
    pub fn annual_rate_pct(&self) -> Decimal {
        self.annual_rate_pct
    }

    /// Term in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.months
    }
}

/// One period of an amortization schedule. Money fields are rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRow {
    /// 1-based period number.
    pub month: u32,
    /// Total payment for the period.
    pub payment: Decimal,
    /// Portion of the payment that reduces the balance.
    pub principal_paid: Decimal,
    /// Portion of the payment that covers interest.
    pub interest: Decimal,
    /// Balance remaining after the payment.
    pub balance: Decimal,
}

/// Ordered sequence of payment rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rows: Vec<PaymentRow>,
}

impl Schedule {
    /// Wraps rows that are already in period order.
    #[must_use]
    pub fn new(rows: Vec<PaymentRow>) -> Self {
        Self { rows }
    }

    /// The rows, in period order.
    #[must_use]
    pub fn rows(&self) -> &[PaymentRow] {
        &self.rows
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> Iter<'_, PaymentRow> {
        self.rows.iter()
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Final row, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PaymentRow> {
        self.rows.last()
    }

    /// Sum of the rounded `principal_paid` fields.
    #[must_use]
    pub fn total_principal(&self) -> Decimal {
        self.rows.iter().map(|r| r.principal_paid).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PaymentRow;
    type IntoIter = Iter<'a, PaymentRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Headline figures of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    /// Fixed periodic payment, rounded.
    pub monthly_payment: Decimal,
    /// Sum of the rounded row payments.
    pub total_payment: Decimal,
    /// Sum of the rounded row interest amounts.
    pub total_interest: Decimal,
}

/// Full answer to a loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Fixed periodic payment, rounded.
    pub monthly_payment: Decimal,
    /// Sum of the rounded row payments.
    pub total_payment: Decimal,
    /// Sum of the rounded row interest amounts.
    pub total_interest: Decimal,
    /// Period-by-period breakdown.
    pub schedule: Schedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_midpoint_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(599.55052)), dec!(599.55));
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_round_money_clears_negative_zero() {
        let rounded = round_money(dec!(-0.0001));
        assert!(rounded.is_zero());
        assert!(!rounded.is_sign_negative());
    }

    #[test]
    fn test_loan_terms_accepts_zero_rate() {
        let terms = LoanTerms::new(dec!(12000), Decimal::ZERO, 12).unwrap();
        assert_eq!(terms.annual_rate_pct(), Decimal::ZERO);
        assert_eq!(terms.principal(), dec!(12000));
    }

    #[test]
    fn test_loan_terms_zero_principal_or_term_is_missing() {
        assert_eq!(
            LoanTerms::new(Decimal::ZERO, dec!(5), 12),
            Err(CoreError::MissingLoanFields)
        );
        assert_eq!(
            LoanTerms::new(dec!(1000), dec!(5), 0),
            Err(CoreError::MissingLoanFields)
        );
    }

    #[test]
    fn test_loan_terms_rejects_out_of_range() {
        assert!(matches!(
            LoanTerms::new(dec!(-5), dec!(5), 12),
            Err(CoreError::InvalidField { ref field, .. }) if field == "principal"
        ));
        assert!(matches!(
            LoanTerms::new(dec!(1000), dec!(-0.5), 12),
            Err(CoreError::InvalidField { ref field, .. }) if field == "annualRatePct"
        ));
        assert!(LoanTerms::new(dec!(1000), dec!(5), MAX_MONTHS + 1).is_err());
        assert!(LoanTerms::new(MAX_PRINCIPAL + dec!(1), dec!(5), 12).is_err());
        assert!(LoanTerms::new(dec!(1000), MAX_ANNUAL_RATE_PCT + dec!(1), 12).is_err());
    }

    #[test]
    fn test_loan_terms_rejects_rate_too_large_for_term() {
        for (principal, rate) in [(dec!(100000), dec!(100)), (dec!(1000), dec!(10000))] {
            let err = LoanTerms::new(principal, rate, MAX_MONTHS).unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidField { ref field, .. } if field == "annualRatePct"
            ));
            assert_eq!(
                err.to_string(),
                "Invalid annualRatePct: is too large for a 1200-month term"
            );
        }
    }

    #[test]
    fn test_loan_terms_growth_bound_depends_on_term() {
        // 10000% a year compounds to 9.33x per month.
        assert!(LoanTerms::new(dec!(1000), MAX_ANNUAL_RATE_PCT, 9).is_ok());
        assert!(LoanTerms::new(dec!(1000), MAX_ANNUAL_RATE_PCT, 10).is_err());
        assert!(LoanTerms::new(dec!(100000), dec!(30), 480).is_ok());
        assert!(LoanTerms::new(dec!(100000), dec!(6), MAX_MONTHS).is_ok());
    }

    #[test]
    fn test_payment_row_wire_names() {
        let row = PaymentRow {
            month: 1,
            payment: dec!(1000),
            principal_paid: dec!(1000),
            interest: Decimal::ZERO,
            balance: dec!(11000),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["month"], 1);
        assert_eq!(json["principalPaid"], 1000.0);
        assert_eq!(json["balance"], 11000.0);
        assert!(json.get("principal_paid").is_none());
    }

    #[test]
    fn test_schedule_serializes_as_array() {
        let schedule = Schedule::new(vec![PaymentRow {
            month: 1,
            payment: dec!(10.5),
            principal_paid: dec!(10.5),
            interest: Decimal::ZERO,
            balance: Decimal::ZERO,
        }]);
        let json = serde_json::to_value(&schedule).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["payment"], 10.5);
    }
}
