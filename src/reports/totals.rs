//! Income, expense and investment totals

use crate::models::{Investment, Money, Transaction, TransactionKind};

/// Sums over one set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodTotals {
    pub income: Money,
    pub expense: Money,
    /// Investment-kind transactions only; holdings are not included
    pub investment: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Sum amounts of a single kind
pub fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Totals per kind and the resulting balance
pub fn period_totals(transactions: &[Transaction]) -> PeriodTotals {
    let income = sum_kind(transactions, TransactionKind::Income);
    let expense = sum_kind(transactions, TransactionKind::Expense);
    let investment = sum_kind(transactions, TransactionKind::Investment);

    PeriodTotals {
        income,
        expense,
        investment,
        balance: income - expense,
    }
}

/// Investment-kind transactions plus every holding's initial amount
///
/// The two sources are independent and are added without deduplication.
pub fn total_investment(transactions: &[Transaction], investments: &[Investment]) -> Money {
    let from_transactions = sum_kind(transactions, TransactionKind::Investment);
    let from_portfolio: Money = investments.iter().map(|inv| inv.initial_amount).sum();
    from_transactions + from_portfolio
}
