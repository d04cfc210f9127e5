//! Period filtering

use chrono::NaiveDate;

use crate::models::{ReportPeriod, Transaction};

/// Transactions dated on or after the period's start, in input order
///
/// `today` is supplied by the caller; the wall clock is never read here.
pub fn filter_by_period(
    transactions: &[Transaction],
    period: ReportPeriod,
    today: NaiveDate,
) -> Vec<Transaction> {
    match period.start_date(today) {
        Some(start) => transactions
            .iter()
            .filter(|t| t.date >= start)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}
