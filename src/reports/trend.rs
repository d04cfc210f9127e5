//! Monthly income/expense trend

use std::collections::BTreeMap;

use crate::models::{Money, MonthKey, Transaction, TransactionKind};

/// Maximum number of months returned by [`monthly_trend`]
pub const MAX_TREND_MONTHS: usize = 6;

/// Income, expense and balance for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: MonthKey,
    /// Display label such as "Jan 2024"
    pub label: String,
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Per-month totals, newest month first, at most [`MAX_TREND_MONTHS`] entries
///
/// Every month with at least one transaction gets a bucket; a month holding
/// only investment transactions shows zero income and expense.
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthSummary> {
    let mut buckets: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let bucket = buckets
            .entry(MonthKey::from_date(txn.date))
            .or_insert((Money::zero(), Money::zero()));
        match txn.kind {
            TransactionKind::Income => bucket.0 += txn.amount,
            TransactionKind::Expense => bucket.1 += txn.amount,
            TransactionKind::Investment => {}
        }
    }

    buckets
        .into_iter()
        .rev()
        .take(MAX_TREND_MONTHS)
        .map(|(month, (income, expense))| MonthSummary {
            month,
            label: month.label(),
            income,
            expense,
            balance: income - expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind::*;
    use crate::reports::test_support::{date, txn};

    #[test]
    fn test_groups_by_month_newest_first() {
        let txns = vec![
            txn(1, Income, "Salary", 1_000, date(2024, 1, 5)),
            txn(2, Expense, "Food", 400, date(2024, 1, 20)),
            txn(3, Expense, "Food", 100, date(2024, 2, 2)),
            txn(4, Income, "Bonus", 50, date(2023, 12, 31)),
        ];

        let trend = monthly_trend(&txns);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].month, MonthKey::new(2024, 2));
        assert_eq!(trend[0].income, Money::zero());
        assert_eq!(trend[0].expense, Money::from_units(100));
        assert_eq!(trend[0].balance, Money::from_units(-100));

        assert_eq!(trend[1].month, MonthKey::new(2024, 1));
        assert_eq!(trend[1].label, "Jan 2024");
        assert_eq!(trend[1].balance, Money::from_units(600));

        assert_eq!(trend[2].month, MonthKey::new(2023, 12));
        assert_eq!(trend[2].expense, Money::zero());
    }

    #[test]
    fn test_truncated_to_six_months() {
        let txns: Vec<_> = (1..=12)
            .map(|m| txn(m as u64, Expense, "Rent", 100, date(2024, m, 1)))
            .collect();

        let trend = monthly_trend(&txns);

        assert_eq!(trend.len(), MAX_TREND_MONTHS);
        assert_eq!(trend[0].month, MonthKey::new(2024, 12));
        assert_eq!(trend[5].month, MonthKey::new(2024, 7));
        assert!(trend.windows(2).all(|w| w[0].month > w[1].month));
    }

    #[test]
    fn test_investment_only_month_is_zero() {
        let txns = vec![txn(1, Investment, "Stocks", 500, date(2024, 4, 1))];
        let trend = monthly_trend(&txns);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].income, Money::zero());
        assert_eq!(trend[0].expense, Money::zero());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut txns = vec![
            txn(1, Income, "Salary", 1_000, date(2024, 3, 5)),
            txn(2, Expense, "Food", 400, date(2023, 1, 20)),
            txn(3, Expense, "Food", 100, date(2024, 2, 2)),
        ];
        let forward = monthly_trend(&txns);
        txns.reverse();
        assert_eq!(monthly_trend(&txns), forward);
    }

    #[test]
    fn test_empty() {
        assert!(monthly_trend(&[]).is_empty());
    }
}
