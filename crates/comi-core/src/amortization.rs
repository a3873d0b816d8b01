//! Annuity amortization.
//!
//! A fixed-rate loan of principal `P` over `n` months at monthly rate `r` is
//! repaid with the level payment
//!
//! ```text
//! A = P * r / (1 - (1 + r)^-n)        (r > 0)
//! A = P / n                           (r = 0)
//! ```
//!
//! Each period the interest on the outstanding balance is charged first and
//! the rest of the payment reduces the balance. Balances are carried at full
//! precision; only the emitted rows are rounded.

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::types::{round_money, CalculationResult, LoanSummary, LoanTerms, PaymentRow, Schedule};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Converts an annual percentage rate to the periodic monthly rate.
///
/// `6` (percent per year) becomes `0.005`.
#[must_use]
pub fn monthly_rate(annual_rate_pct: Decimal) -> Decimal {
    annual_rate_pct / PERCENT / MONTHS_PER_YEAR
}

/// Fixed monthly payment that fully amortizes `principal` over `months`.
///
/// The result is not rounded.
///
/// # Panics
///
/// Panics if `months` is zero, or if `(1 + r)^months` overflows the decimal
/// range. Use [`LoanTerms`] to validate caller input first.
#[must_use]
pub fn monthly_payment(principal: Decimal, annual_rate_pct: Decimal, months: u32) -> Decimal {
    let periods = Decimal::from(months);
    let rate = monthly_rate(annual_rate_pct);
    if rate.is_zero() {
        return principal / periods;
    }

    let discount = Decimal::ONE / (Decimal::ONE + rate).powu(u64::from(months));

    match rate.checked_div(Decimal::ONE - discount) {
        Some(factor) => principal * factor,
        // Rate too small to move (1 + r)^n off one at this precision.
        None => principal / periods,
    }
}

/// Builds the month-by-month schedule for the annuity payment.
///
/// The schedule has at most `months` rows; it ends early if the balance
/// reaches zero before the last period.
#[must_use]
pub fn build_schedule(principal: Decimal, annual_rate_pct: Decimal, months: u32) -> Schedule {
    let payment = monthly_payment(principal, annual_rate_pct, months);
    build_schedule_with_payment(principal, annual_rate_pct, months, payment)
}

/// Builds a schedule for an explicit periodic payment.
///
/// With a payment above the annuity payment the loan is paid off early and
/// the schedule stops at the period that clears the balance. The last
/// principal portion is capped at the outstanding balance, so the balance
/// never goes negative.
#[must_use]
pub fn build_schedule_with_payment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    months: u32,
    payment: Decimal,
) -> Schedule {
    let rate = monthly_rate(annual_rate_pct);
    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance * rate;
        let principal_paid = (payment - interest).min(balance);
        let ending = balance - principal_paid;

        rows.push(PaymentRow {
            month,
            payment: round_money(payment),
            principal_paid: round_money(principal_paid),
            interest: round_money(interest),
            balance: round_money(ending),
        });

        balance = ending;
        if balance <= Decimal::ZERO {
            break;
        }
    }

    Schedule::new(rows)
}

/// Totals of a schedule.
///
/// Totals are sums of the already rounded row values, so `total_payment` can
/// differ by a few cents from `monthly_payment * rows`.
#[must_use]
pub fn summarize(schedule: &Schedule) -> LoanSummary {
    let total_payment: Decimal = schedule.iter().map(|row| row.payment).sum();
    let total_interest: Decimal = schedule.iter().map(|row| row.interest).sum();

    LoanSummary {
        monthly_payment: schedule
            .rows()
            .first()
            .map_or(Decimal::ZERO, |row| round_money(row.payment)),
        total_payment: round_money(total_payment),
        total_interest: round_money(total_interest),
    }
}

/// Computes payment, schedule and totals for validated terms.
#[must_use]
pub fn calculate(terms: &LoanTerms) -> CalculationResult {
    let payment = monthly_payment(terms.principal(), terms.annual_rate_pct(), terms.months());
    let schedule = build_schedule_with_payment(
        terms.principal(),
        terms.annual_rate_pct(),
        terms.months(),
        payment,
    );
    let summary = summarize(&schedule);

    debug!(
        "calculated {} rows for principal={} rate={}% months={}",
        schedule.len(),
        terms.principal(),
        terms.annual_rate_pct(),
        terms.months()
    );

    CalculationResult {
        monthly_payment: round_money(payment),
        total_payment: summary.total_payment,
        total_interest: summary.total_interest,
        schedule,
    }
}
