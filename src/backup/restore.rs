//! Backup restoration

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::storage::Store;

use super::manager::{BackupArchive, BACKUP_SCHEMA_VERSION};

/// Result of a restore operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub transactions_restored: usize,
    pub investments_restored: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!(
            "Restored {} transactions and {} investments from backup of {}",
            self.transactions_restored,
            self.investments_restored,
            self.backup_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Outcome of checking a backup without restoring it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub transaction_count: usize,
    pub investment_count: usize,
}

/// Restores archives into a store
pub struct RestoreManager<S: Store> {
    store: S,
}

impl<S: Store> RestoreManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replace everything in the store with the backup contents
    pub fn restore_from_file(&self, backup_path: &Path) -> TrackerResult<RestoreResult> {
        let archive = read_archive(backup_path)?;
        self.restore_from_archive(archive)
    }

    pub fn restore_from_archive(&self, archive: BackupArchive) -> TrackerResult<RestoreResult> {
        check_schema(&archive)?;

        let schema_version = archive.schema_version;
        let backup_date = archive.created_at;
        let ledger = archive.into_ledger();

        self.store.save(&ledger)?;

        Ok(RestoreResult {
            schema_version,
            backup_date,
            transactions_restored: ledger.transactions.len(),
            investments_restored: ledger.investments.len(),
        })
    }

    /// Parse a backup file and report what it holds
    pub fn validate_backup(&self, backup_path: &Path) -> TrackerResult<ValidationResult> {
        let archive = read_archive(backup_path)?;
        check_schema(&archive)?;

        Ok(ValidationResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            transaction_count: archive.transactions.len(),
            investment_count: archive.investments.len(),
        })
    }
}

fn read_archive(path: &Path) -> TrackerResult<BackupArchive> {
    let contents = fs::read_to_string(path)
        .map_err(|e| TrackerError::Io(format!("Failed to read backup file: {}", e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| TrackerError::Json(format!("Failed to parse backup file: {}", e)))
}

fn check_schema(archive: &BackupArchive) -> TrackerResult<()> {
    if archive.schema_version > BACKUP_SCHEMA_VERSION {
        return Err(TrackerError::Config(format!(
            "Backup schema version {} is newer than supported version {}",
            archive.schema_version, BACKUP_SCHEMA_VERSION
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use crate::config::{BackupRetention, TrackerPaths};
    use crate::models::{Ledger, Money, NewTransaction, Transaction, TransactionId, TransactionKind};
    use crate::storage::{JsonStore, MemoryStore};
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    fn ledger() -> Ledger {
        let txn = Transaction::create(
            TransactionId::from_raw(1),
            NewTransaction::new(
                TransactionKind::Expense,
                "Rent",
                Money::from_units(1_500_000),
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ),
        )
        .unwrap();
        Ledger::new(vec![txn], Vec::new())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_backup_and_restore_into_json_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let manager = BackupManager::new(&paths, BackupRetention::default());
        let backup = manager.create_backup(&ledger(), now()).unwrap();

        let store = JsonStore::new(&paths);
        store.save(&Ledger::default()).unwrap();

        let result = RestoreManager::new(&store).restore_from_file(&backup).unwrap();

        assert_eq!(result.transactions_restored, 1);
        assert_eq!(result.investments_restored, 0);
        assert_eq!(result.backup_date, now());
        assert!(result.summary().contains("Restored 1 transactions"));
        assert_eq!(store.load().unwrap(), ledger());
    }

    #[test]
    fn test_validate_backup() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let backup = BackupManager::new(&paths, BackupRetention::default())
            .create_backup(&ledger(), now())
            .unwrap();

        let store = MemoryStore::new();
        let validation = RestoreManager::new(&store).validate_backup(&backup).unwrap();

        assert_eq!(validation.transaction_count, 1);
        assert_eq!(store.save_count().unwrap(), 0);
    }

    #[test]
    fn test_rejects_newer_schema() {
        let mut archive = BackupArchive::new(&ledger(), now());
        archive.schema_version = BACKUP_SCHEMA_VERSION + 1;

        let store = MemoryStore::new();
        let err = RestoreManager::new(&store)
            .restore_from_archive(archive)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
        assert_eq!(store.save_count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup-bad.json");
        fs::write(&path, "{").unwrap();

        let store = MemoryStore::new();
        assert!(matches!(
            RestoreManager::new(&store).restore_from_file(&path),
            Err(TrackerError::Json(_))
        ));
    }
}
