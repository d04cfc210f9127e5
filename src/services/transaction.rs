//! Transaction service
//!
//! Recording, removing and searching transactions. Each mutation is saved
//! through the store and then written to the audit log.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{NewTransaction, ReportPeriod, Transaction, TransactionId, TransactionKind};
use crate::state::AppState;
use crate::storage::Store;

/// Service for transaction management
pub struct TransactionService<'a, S: Store> {
    state: &'a mut AppState<S>,
    now: DateTime<Utc>,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description or category
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    /// Only transactions inside this period, relative to the service clock
    pub period: Option<ReportPeriod>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn period(mut self, period: ReportPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a, S: Store> TransactionService<'a, S> {
    /// Create a service that reads the wall clock
    pub fn new(state: &'a mut AppState<S>) -> Self {
        Self::at(state, Utc::now())
    }

    /// Create a service with a fixed clock
    pub fn at(state: &'a mut AppState<S>, now: DateTime<Utc>) -> Self {
        Self { state, now }
    }

    /// Validate and record a new transaction
    ///
    /// The transaction is kept in memory even when saving fails; the
    /// `Storage` error is still returned.
    pub fn create(&mut self, input: NewTransaction) -> TrackerResult<Transaction> {
        let id = TransactionId::next(self.now, self.state.transactions().iter().map(|t| &t.id));
        let txn = Transaction::create(id, input)?;

        self.state.ledger_mut().transactions.push(txn.clone());
        self.state.persist()?;

        self.state.log_create(
            self.now,
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.category.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.state.transactions().iter().find(|t| t.id == id)
    }

    /// Remove a transaction by ID
    pub fn delete(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let index = self
            .state
            .transactions()
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let txn = self.state.ledger_mut().transactions.remove(index);
        self.state.persist()?;

        self.state.log_delete(
            self.now,
            EntityType::Transaction,
            id.to_string(),
            Some(format!("{} {}", txn.date, txn.category)),
            &txn,
        )?;

        Ok(txn)
    }

    /// Matching transactions, newest date first
    pub fn list(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let today = self.now.date_naive();

        let mut transactions: Vec<Transaction> = self
            .state
            .transactions()
            .iter()
            .filter(|t| filter.search.as_deref().map_or(true, |term| t.matches_search(term)))
            .filter(|t| filter.category.as_deref().map_or(true, |c| t.category == c))
            .filter(|t| filter.kind.map_or(true, |k| t.kind == k))
            .filter(|t| filter.period.map_or(true, |p| p.contains(t.date, today)))
            .cloned()
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        transactions
    }

    /// Distinct category names in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for txn in self.state.transactions() {
            if !seen.contains(&txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }

    pub fn count(&self) -> usize {
        self.state.transactions().len()
    }
}
