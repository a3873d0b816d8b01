//! CSV export of amortization schedules.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::Schedule;

/// Suggested download name for an exported schedule.
pub const CSV_FILENAME: &str = "amortization.csv";

/// Media type of an exported schedule.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Column names, in output order.
pub const CSV_COLUMNS: [&str; 5] = ["month", "payment", "principalPaid", "interest", "balance"];

/// CSV record for one schedule row.
#[derive(Debug, Serialize)]
struct CsvRow {
    month: u32,
    payment: String,
    principal_paid: String,
    interest: String,
    balance: String,
}

/// Formats a rounded amount without trailing zeros (`1000.00` -> `1000`, `599.50` -> `599.5`).
fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Writes a schedule as CSV: a header line, then one line per period.
///
/// # Example
///
/// ```rust
/// use comi_core::{build_schedule, schedule_to_csv};
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let csv = schedule_to_csv(&build_schedule(dec!(3000), Decimal::ZERO, 3)).unwrap();
/// assert_eq!(
///     csv,
///     "month,payment,principalPaid,interest,balance\n\
///      1,1000,1000,0,2000\n\
///      2,1000,1000,0,1000\n\
///      3,1000,1000,0,0\n"
/// );
/// ```
pub fn schedule_to_csv(schedule: &Schedule) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_COLUMNS)
        .map_err(|e| CoreError::export(e.to_string()))?;

    for row in schedule {
        wtr.serialize(CsvRow {
            month: row.month,
            payment: format_amount(row.payment),
            principal_paid: format_amount(row.principal_paid),
            interest: format_amount(row.interest),
            balance: format_amount(row.balance),
        })
        .map_err(|e| CoreError::export(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| CoreError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::export(e.to_string()))
}
