//! Application state
//!
//! `AppState` owns the in-memory ledger for one session together with the
//! store it was loaded from and an optional audit logger. Services borrow it
//! mutably; nothing is global.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, Ledger, Transaction};
use crate::storage::Store;

pub struct AppState<S: Store> {
    store: S,
    ledger: Ledger,
    audit: Option<AuditLogger>,
}

impl<S: Store> AppState<S> {
    /// Load both collections from `store`
    pub fn load(store: S) -> TrackerResult<Self> {
        let ledger = store.load().map_err(into_storage)?;
        Ok(Self {
            store,
            ledger,
            audit: None,
        })
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Save the current ledger
    ///
    /// The in-memory ledger stays authoritative when this fails, so the call
    /// can simply be retried.
    pub fn persist(&self) -> TrackerResult<()> {
        self.store.save(&self.ledger).map_err(into_storage)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn investments(&self) -> &[Investment] {
        &self.ledger.investments
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub(crate) fn log_create<T: Serialize>(
        &self,
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        self.log(|| AuditEntry::create(at, entity_type, entity_id, entity_name, entity))
    }

    pub(crate) fn log_update<T: Serialize>(
        &self,
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> TrackerResult<()> {
        self.log(|| AuditEntry::update(at, entity_type, entity_id, entity_name, before, after))
    }

    pub(crate) fn log_delete<T: Serialize>(
        &self,
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        self.log(|| AuditEntry::delete(at, entity_type, entity_id, entity_name, entity))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> TrackerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

/// Persistence failures always surface as `TrackerError::Storage`
fn into_storage(err: TrackerError) -> TrackerError {
    match err {
        TrackerError::Storage(_) => err,
        other => TrackerError::Storage(other.to_string()),
    }
}
