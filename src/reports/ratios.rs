//! Financial health ratios
//!
//! Income and expense come from the selected period. Total investment and the
//! average monthly expense are always computed over the whole history.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::models::{Investment, Money, MonthKey, ReportPeriod, Transaction, TransactionKind};

use super::filter::filter_by_period;
use super::totals::{period_totals, total_investment};
use super::{percentage_of, round1};

pub const SAVINGS_THRESHOLD: f64 = 20.0;
pub const INVESTMENT_THRESHOLD: f64 = 15.0;
/// Classified with the same `>=` rule as the others, so a higher expense
/// ratio reads as healthier
pub const EXPENSE_THRESHOLD: f64 = 60.0;
pub const EMERGENCY_FUND_THRESHOLD: f64 = 3.0;

/// Health classification of a ratio against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Good,
    Warning,
    Poor,
}

impl Health {
    /// `Good` at or above the threshold, `Warning` at or above half of it,
    /// `Poor` otherwise
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value >= threshold {
            Self::Good
        } else if value >= threshold * 0.5 {
            Self::Warning
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Poor => "Poor",
        };
        f.pad(label)
    }
}

/// A rounded ratio value with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioReading {
    pub value: f64,
    pub threshold: f64,
    pub health: Health,
}

impl RatioReading {
    pub fn new(raw: f64, threshold: f64) -> Self {
        let value = round1(raw);
        Self {
            value,
            threshold,
            health: Health::classify(value, threshold),
        }
    }
}

/// Savings, investment and expense ratios (percent) and emergency fund months
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialRatios {
    pub savings_ratio: RatioReading,
    pub investment_ratio: RatioReading,
    pub expense_ratio: RatioReading,
    pub emergency_fund_months: RatioReading,
}

/// Mean of per-month expense totals over months that have any expense
///
/// Returns `None` when there are no expenses at all.
pub fn average_monthly_expense(transactions: &[Transaction]) -> Option<f64> {
    let mut per_month: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        *per_month.entry(MonthKey::from_date(txn.date)).or_default() += txn.amount;
    }

    if per_month.is_empty() {
        return None;
    }

    let total: Money = per_month.values().sum();
    Some(total.as_f64() / per_month.len() as f64)
}

/// Derive the four health ratios
pub fn financial_ratios(
    transactions: &[Transaction],
    investments: &[Investment],
    period: ReportPeriod,
    today: NaiveDate,
) -> FinancialRatios {
    let in_period = filter_by_period(transactions, period, today);
    let totals = period_totals(&in_period);
    let invested = total_investment(transactions, investments);

    let savings = percentage_of(totals.income - totals.expense, totals.income);
    let investment = percentage_of(invested, totals.income);
    let expense = percentage_of(totals.expense, totals.income);

    let emergency_months = match average_monthly_expense(transactions) {
        Some(avg) if avg > 0.0 => invested.as_f64() / avg,
        _ => 0.0,
    };

    FinancialRatios {
        savings_ratio: RatioReading::new(savings, SAVINGS_THRESHOLD),
        investment_ratio: RatioReading::new(investment, INVESTMENT_THRESHOLD),
        expense_ratio: RatioReading::new(expense, EXPENSE_THRESHOLD),
        emergency_fund_months: RatioReading::new(emergency_months, EMERGENCY_FUND_THRESHOLD),
    }
}
