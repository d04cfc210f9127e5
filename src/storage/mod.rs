//! Storage layer for MoneyTracker
//!
//! The [`Store`] trait is the persistence boundary: it loads and saves the
//! whole [`Ledger`]. [`JsonStore`] writes JSON files atomically;
//! [`MemoryStore`] keeps everything in memory.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::error::TrackerResult;
use crate::models::Ledger;

/// Persistence boundary for both collections
///
/// `load` returns empty collections when nothing was persisted yet.
/// Failures are reported as `TrackerError::Storage`.
pub trait Store {
    fn load(&self) -> TrackerResult<Ledger>;
    fn save(&self, ledger: &Ledger) -> TrackerResult<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn load(&self) -> TrackerResult<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        (**self).save(ledger)
    }
}
