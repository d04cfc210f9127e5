//! Core data models for MoneyTracker
//!
//! This module contains the data structures of the tracking domain:
//! transactions, investment holdings, money amounts, IDs and periods.

pub mod ids;
pub mod investment;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::{InvestmentId, TransactionId};
pub use investment::{Investment, NewInvestment};
pub use money::Money;
pub use period::{MonthKey, ReportPeriod};
pub use transaction::{NewTransaction, Transaction, TransactionKind};

use serde::{Deserialize, Serialize};

/// Both owned collections, as loaded from and saved to a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, investments: Vec<Investment>) -> Self {
        Self {
            transactions,
            investments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.investments.is_empty()
    }
}
