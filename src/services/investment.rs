//! Investment service
//!
//! Holdings are created, revalued and removed here. Revaluation keeps the
//! initial amount and moves only the current value.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, InvestmentId, Money, NewInvestment};
use crate::state::AppState;
use crate::storage::Store;

/// Result of revaluing a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange {
    pub before: Money,
    pub after: Money,
    /// `after - before`
    pub delta: Money,
}

/// Service for portfolio holdings
pub struct InvestmentService<'a, S: Store> {
    state: &'a mut AppState<S>,
    now: DateTime<Utc>,
}

impl<'a, S: Store> InvestmentService<'a, S> {
    pub fn new(state: &'a mut AppState<S>) -> Self {
        Self::at(state, Utc::now())
    }

    pub fn at(state: &'a mut AppState<S>, now: DateTime<Utc>) -> Self {
        Self { state, now }
    }

    /// Validate and record a new holding
    pub fn create(&mut self, input: NewInvestment) -> TrackerResult<Investment> {
        let id = InvestmentId::next(self.now, self.state.investments().iter().map(|i| &i.id));
        let investment = Investment::create(id, input, self.now)?;

        self.state.ledger_mut().investments.push(investment.clone());
        self.state.persist()?;

        self.state.log_create(
            self.now,
            EntityType::Investment,
            investment.id.to_string(),
            Some(investment.name.clone()),
            &investment,
        )?;

        Ok(investment)
    }

    pub fn get(&self, id: InvestmentId) -> Option<&Investment> {
        self.state.investments().iter().find(|i| i.id == id)
    }

    /// Set a holding's current value
    pub fn update_value(&mut self, id: InvestmentId, current: Money) -> TrackerResult<ValueChange> {
        let now = self.now;
        let investment = self
            .state
            .ledger_mut()
            .investments
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| TrackerError::investment_not_found(id.to_string()))?;

        let before_snapshot = investment.clone();
        let before = investment.revalue(current, now)?;
        let after_snapshot = investment.clone();

        self.state.persist()?;

        self.state.log_update(
            now,
            EntityType::Investment,
            id.to_string(),
            Some(after_snapshot.name.clone()),
            &before_snapshot,
            &after_snapshot,
        )?;

        Ok(ValueChange {
            before,
            after: current,
            delta: current - before,
        })
    }

    /// Remove a holding by ID
    pub fn delete(&mut self, id: InvestmentId) -> TrackerResult<Investment> {
        let index = self
            .state
            .investments()
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| TrackerError::investment_not_found(id.to_string()))?;

        let investment = self.state.ledger_mut().investments.remove(index);
        self.state.persist()?;

        self.state.log_delete(
            self.now,
            EntityType::Investment,
            id.to_string(),
            Some(investment.name.clone()),
            &investment,
        )?;

        Ok(investment)
    }

    /// Holdings in insertion order
    pub fn list(&self) -> &[Investment] {
        self.state.investments()
    }
}
