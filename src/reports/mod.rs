//! Aggregation engine for MoneyTracker
//!
//! Pure functions over the transaction and investment collections: period
//! filtering, totals, category breakdowns, the monthly trend, financial
//! ratios and the portfolio summary. Nothing here reads the clock or touches
//! storage; callers pass `today` explicitly.

pub mod analytics;
pub mod breakdown;
pub mod filter;
pub mod portfolio;
pub mod ratios;
pub mod totals;
pub mod trend;

pub use analytics::AnalyticsReport;
pub use breakdown::{breakdown_by_category, CategoryBreakdown};
pub use filter::filter_by_period;
pub use portfolio::{allocation_by_type, portfolio_summary, AllocationSlice, PortfolioSummary};
pub use ratios::{average_monthly_expense, financial_ratios, FinancialRatios, Health, RatioReading};
pub use totals::{period_totals, sum_kind, total_investment, PeriodTotals};
pub use trend::{monthly_trend, MonthSummary, MAX_TREND_MONTHS};

use crate::models::Money;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part` as a percentage of `whole`, or 0 when `whole` is zero
pub fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    part.as_f64() / whole.as_f64() * 100.0
}
