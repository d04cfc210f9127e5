//! Backup system for MoneyTracker
//!
//! `BackupManager` writes dated archives holding both collections and prunes
//! them by retention policy. `RestoreManager` loads an archive back into a
//! [`Store`](crate::storage::Store).
//!
//! # Retention Policy
//!
//! By default the newest 30 daily backups are kept, plus the oldest backup of
//! each of the last 12 months.

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
