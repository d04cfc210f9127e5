//! Investment display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_return, truncate};
use crate::models::Investment;
use crate::services::ValueChange;

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Initial")]
    initial: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Return")]
    return_percent: String,
}

/// Format holdings as a table with per-holding profit and return
pub fn format_investment_table(investments: &[Investment], currency_symbol: &str) -> String {
    if investments.is_empty() {
        return "No investments found.".to_string();
    }

    let rows = investments.iter().map(|inv| InvestmentRow {
        id: inv.id.to_string(),
        kind: truncate(&inv.kind, 12),
        name: truncate(&inv.name, 24),
        initial: inv.initial_amount.format_with_symbol(currency_symbol),
        current: inv.current_amount.format_with_symbol(currency_symbol),
        profit: inv.profit().format_with_symbol(currency_symbol),
        return_percent: format_return(inv.return_percent()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Describe a revaluation as "old -> new (delta)"
pub fn format_value_change(name: &str, change: &ValueChange, currency_symbol: &str) -> String {
    let sign = if change.delta.is_negative() { "" } else { "+" };
    format!(
        "{}: {} -> {} ({}{})",
        name,
        change.before.format_with_symbol(currency_symbol),
        change.after.format_with_symbol(currency_symbol),
        sign,
        change.delta.format_with_symbol(currency_symbol)
    )
}
