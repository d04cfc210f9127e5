//! Dashboard summary formatting

use crate::models::{Money, ReportPeriod};
use crate::reports::{PeriodTotals, PortfolioSummary};

use super::report::{format_return, separator};

/// Headline figures for the summary command
pub fn format_summary(
    period: ReportPeriod,
    totals: &PeriodTotals,
    total_investment: Money,
    portfolio: &PortfolioSummary,
    currency_symbol: &str,
) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let mut output = String::new();

    output.push_str(&format!("Summary: {}\n", period));
    output.push_str(&separator(44));
    output.push('\n');
    output.push_str(&format!("{:<20} {:>23}\n", "Income", money(totals.income)));
    output.push_str(&format!("{:<20} {:>23}\n", "Expense", money(totals.expense)));
    output.push_str(&format!("{:<20} {:>23}\n", "Balance", money(totals.balance)));
    output.push_str(&format!("{:<20} {:>23}\n", "Total Invested", money(total_investment)));
    output.push_str(&format!(
        "{:<20} {:>23}\n",
        "Portfolio Value",
        money(portfolio.total_current)
    ));
    output.push_str(&format!(
        "{:<20} {:>23}\n",
        "Portfolio Return",
        format_return(portfolio.total_return_percent)
    ));

    output
}
