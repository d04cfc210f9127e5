//! Transaction model
//!
//! A single dated money movement classified as income, expense, or an
//! investment contribution. Transactions are immutable once created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Investment,
}

impl TransactionKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            "investment" | "invest" => Some(Self::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// Unvalidated input for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: Option<TransactionKind>,
    pub category: String,
    pub amount: Money,
    pub description: String,
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Convenience constructor with every required field present
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: Some(kind),
            category: category.into(),
            amount,
            description: String::new(),
            date: Some(date),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub category: String,

    /// Always positive; the kind carries the direction
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,
}

impl Transaction {
    /// Validate the input and build a transaction with the given ID
    ///
    /// Fails with `TrackerError::Validation` when the kind, category or date
    /// is missing, or when the amount is not positive.
    pub fn create(id: TransactionId, input: NewTransaction) -> TrackerResult<Self> {
        let kind = input
            .kind
            .ok_or_else(|| TrackerError::Validation("Transaction type is required".into()))?;

        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(TrackerError::Validation(
                "Transaction category is required".into(),
            ));
        }

        if !input.amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Transaction amount must be positive, got {}",
                input.amount
            )));
        }

        let date = input
            .date
            .ok_or_else(|| TrackerError::Validation("Transaction date is required".into()))?;

        Ok(Self {
            id,
            kind,
            category,
            amount: input.amount,
            description: input.description.trim().to_string(),
            date,
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_investment(&self) -> bool {
        self.kind == TransactionKind::Investment
    }

    /// Case-insensitive substring match against description or category
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> NewTransaction {
        NewTransaction::new(
            TransactionKind::Expense,
            "Food",
            Money::from_units(50_000),
            date(2024, 1, 15),
        )
        .with_description("Lunch")
    }

    #[test]
    fn test_create_transaction() {
        let txn = Transaction::create(TransactionId::from_raw(1), input()).unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.amount, Money::from_units(50_000));
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_missing_kind_rejected() {
        let mut bad = input();
        bad.kind = None;
        let err = Transaction::create(TransactionId::from_raw(1), bad).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut bad = input();
        bad.category = "   ".into();
        assert!(Transaction::create(TransactionId::from_raw(1), bad).is_err());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut zero = input();
        zero.amount = Money::zero();
        assert!(Transaction::create(TransactionId::from_raw(1), zero).is_err());

        let mut negative = input();
        negative.amount = Money::from_units(-5);
        assert!(Transaction::create(TransactionId::from_raw(1), negative).is_err());
    }

    #[test]
    fn test_missing_date_rejected() {
        let mut bad = input();
        bad.date = None;
        assert!(Transaction::create(TransactionId::from_raw(1), bad).is_err());
    }

    #[test]
    fn test_empty_description_allowed() {
        let mut ok = input();
        ok.description = String::new();
        assert!(Transaction::create(TransactionId::from_raw(1), ok).is_ok());
    }

    #[test]
    fn test_matches_search() {
        let txn = Transaction::create(TransactionId::from_raw(1), input()).unwrap();
        assert!(txn.matches_search("lunch"));
        assert!(txn.matches_search("FOO"));
        assert!(txn.matches_search(""));
        assert!(!txn.matches_search("salary"));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("invest"), Some(TransactionKind::Investment));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let txn = Transaction::create(TransactionId::from_raw(7), input()).unwrap();
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2024-01-15");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
