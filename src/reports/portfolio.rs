//! Portfolio summary and allocation

use std::collections::HashMap;

use crate::models::{Investment, Money};

use super::{percentage_of, round1};

/// Aggregate value of every holding
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioSummary {
    pub total_initial: Money,
    pub total_current: Money,
    /// `total_current - total_initial`
    pub total_profit: Money,
    /// Unrounded; 0 when nothing was invested
    pub total_return_percent: f64,
}

pub fn portfolio_summary(investments: &[Investment]) -> PortfolioSummary {
    let total_initial: Money = investments.iter().map(|i| i.initial_amount).sum();
    let total_current: Money = investments.iter().map(|i| i.current_amount).sum();
    let total_profit = total_current - total_initial;

    let total_return_percent = if total_initial.is_positive() {
        total_profit.as_f64() / total_initial.as_f64() * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_initial,
        total_current,
        total_profit,
        total_return_percent,
    }
}

/// Current value held in one investment type
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub kind: String,
    pub current: Money,
    /// Share of the total current value, rounded to 1 decimal
    pub percentage: f64,
}

/// Current value grouped by investment type, largest first
pub fn allocation_by_type(investments: &[Investment]) -> Vec<AllocationSlice> {
    let mut by_kind: HashMap<&str, Money> = HashMap::new();
    for investment in investments {
        *by_kind.entry(investment.kind.as_str()).or_default() += investment.current_amount;
    }

    let total: Money = by_kind.values().sum();

    let mut slices: Vec<AllocationSlice> = by_kind
        .into_iter()
        .map(|(kind, current)| AllocationSlice {
            kind: kind.to_string(),
            current,
            percentage: round1(percentage_of(current, total)),
        })
        .collect();

    slices.sort_by(|a, b| b.current.cmp(&a.current).then_with(|| a.kind.cmp(&b.kind)));
    slices
}
