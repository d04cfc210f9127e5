//! In-memory store
//!
//! Holds a ledger snapshot instead of files. Used for sessions that should not
//! touch disk and as the store in unit tests.

use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Ledger;

use super::Store;

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Ledger>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing data
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            data: RwLock::new(ledger),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> TrackerResult<usize> {
        let saves = self
            .saves
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*saves)
    }

    /// Copy of the last saved ledger
    pub fn snapshot(&self) -> TrackerResult<Ledger> {
        self.load()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> TrackerResult<Ledger> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut saves = self
            .saves
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = ledger.clone();
        *saves += 1;
        Ok(())
    }
}
