//! Property tests for the amortization schedule.
//!
//! Strategies cover the whole domain `LoanTerms::new` accepts.

use comi_core::amortization::{build_schedule, monthly_payment};
use comi_core::types::{MAX_ANNUAL_RATE_PCT, MAX_MONTHS, MAX_PRINCIPAL, MAX_RATE_GROWTH};
use comi_core::{calculate, LoanTerms};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Principal in cents, weighted towards everyday amounts.
fn principal() -> impl Strategy<Value = Decimal> {
    let max_cents = (MAX_PRINCIPAL * dec!(100)).to_i64().unwrap_or(i64::MAX);
    prop_oneof![1i64..=100_000_000i64, 1i64..=max_cents]
        .prop_map(|cents| Decimal::new(cents, 2))
}

fn months() -> impl Strategy<Value = u32> {
    1u32..=MAX_MONTHS
}

/// Highest whole-basis-point rate whose growth over `months` stays in bounds.
fn max_rate_bp(months: u32) -> i64 {
    let growth = MAX_RATE_GROWTH.to_f64().unwrap_or(1e9);
    let cap = MAX_ANNUAL_RATE_PCT.to_f64().unwrap_or(10_000.0);
    let pct = (growth.powf(1.0 / f64::from(months)) - 1.0) * 1200.0;
    // Stay clear of the bound, where f64 and decimal rounding disagree.
    (pct.min(cap) * 100.0 * 0.999).floor() as i64
}

/// Accepted `(principal, annual rate %, months)` triples.
fn loan() -> impl Strategy<Value = (Decimal, Decimal, u32)> {
    months()
        .prop_flat_map(|n| (principal(), 0i64..=max_rate_bp(n), Just(n)))
        .prop_map(|(p, bp, n)| (p, Decimal::new(bp, 2), n))
        .prop_filter("terms out of range", |&(p, r, n)| LoanTerms::new(p, r, n).is_ok())
}

proptest! {
    #[test]
    fn schedule_is_non_empty_and_bounded((p, r, n) in loan()) {
        let schedule = build_schedule(p, r, n);
        prop_assert!(!schedule.is_empty());
        prop_assert!(schedule.len() <= n as usize);
    }

    #[test]
    fn months_are_sequential((p, r, n) in loan()) {
        let schedule = build_schedule(p, r, n);
        for (i, row) in schedule.iter().enumerate() {
            prop_assert_eq!(row.month as usize, i + 1);
        }
    }

    #[test]
    fn balance_is_non_increasing_and_ends_near_zero(
        (p, r, n) in loan(),
    ) {
        let schedule = build_schedule(p, r, n);
        for pair in schedule.rows().windows(2) {
            prop_assert!(pair[1].balance <= pair[0].balance);
        }
        let last = schedule.last().unwrap();
        prop_assert!(last.balance >= Decimal::ZERO);
        prop_assert!(last.balance <= dec!(0.01));
    }

    #[test]
    fn principal_is_conserved((p, r, n) in loan()) {
        let schedule = build_schedule(p, r, n);
        // Each rounded row is off by at most half a cent.
        let tolerance = dec!(0.005) * Decimal::from(schedule.len()) + dec!(0.01);
        prop_assert!((schedule.total_principal() - p).abs() <= tolerance);
    }

    #[test]
    fn zero_rate_has_no_interest(p in principal(), n in months()) {
        prop_assert_eq!(monthly_payment(p, Decimal::ZERO, n), p / Decimal::from(n));
        let schedule = build_schedule(p, Decimal::ZERO, n);
        prop_assert!(schedule.iter().all(|row| row.interest.is_zero()));
    }

    #[test]
    fn calculation_is_deterministic((p, r, n) in loan()) {
        prop_assert_eq!(monthly_payment(p, r, n), monthly_payment(p, r, n));

        let terms = LoanTerms::new(p, r, n).unwrap();
        prop_assert_eq!(calculate(&terms), calculate(&terms));
    }

    #[test]
    fn totals_match_rows((p, r, n) in loan()) {
        let terms = LoanTerms::new(p, r, n).unwrap();
        let result = calculate(&terms);
        let payments: Decimal = result.schedule.iter().map(|row| row.payment).sum();
        let interest: Decimal = result.schedule.iter().map(|row| row.interest).sum();
        prop_assert_eq!(result.total_payment, payments);
        prop_assert_eq!(result.total_interest, interest);
    }
}

#[test]
fn mortgage_scenario() {
    let terms = LoanTerms::new(dec!(100000), dec!(6), 360).unwrap();
    let result = calculate(&terms);

    assert_eq!(result.monthly_payment, dec!(599.55));
    assert_eq!(result.schedule.len(), 360);
    assert_eq!(result.schedule.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn interest_free_scenario() {
    let terms = LoanTerms::new(dec!(12000), Decimal::ZERO, 12).unwrap();
    let result = calculate(&terms);

    assert_eq!(result.monthly_payment, dec!(1000.00));
    assert_eq!(result.schedule.len(), 12);
    for row in &result.schedule {
        assert_eq!(row.interest, Decimal::ZERO);
        assert_eq!(row.principal_paid, dec!(1000.00));
    }
}
