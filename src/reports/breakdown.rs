//! Category breakdown

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionKind};

use super::{percentage_of, round1};

/// One category's share of a kind's total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Money,
    /// Share of the kind total, rounded to 1 decimal
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Group transactions of `kind` by category
///
/// Rows are ordered by total, largest first, then by category name.
/// Percentages are all 0 when the kind total is 0.
pub fn breakdown_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<CategoryBreakdown> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
    let mut kind_total = Money::zero();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        let entry = by_category
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
        kind_total += txn.amount;
    }

    let mut rows: Vec<CategoryBreakdown> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryBreakdown {
            category: category.to_string(),
            total,
            percentage: round1(percentage_of(total, kind_total)),
            transaction_count: count,
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    rows
}
