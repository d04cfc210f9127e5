//! Backup manager
//!
//! Writes dated JSON archives of the ledger to the backup directory and
//! prunes them according to the retention policy.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::TrackerPaths;
use crate::config::settings::BackupRetention;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, Ledger, MonthKey, Transaction};

pub const BACKUP_SCHEMA_VERSION: u32 = 1;

const FILE_PREFIX: &str = "backup-";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S-%3f";

/// Metadata about one backup file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
    /// Oldest backup of its calendar month; kept under the monthly quota
    pub is_monthly: bool,
}

/// On-disk backup format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupArchive {
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

impl BackupArchive {
    pub fn new(ledger: &Ledger, created_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: BACKUP_SCHEMA_VERSION,
            created_at,
            transactions: ledger.transactions.clone(),
            investments: ledger.investments.clone(),
        }
    }

    pub fn into_ledger(self) -> Ledger {
        Ledger::new(self.transactions, self.investments)
    }
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    pub fn new(paths: &TrackerPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            retention,
        }
    }

    /// Write `ledger` to a new archive stamped with `now`
    pub fn create_backup(&self, ledger: &Ledger, now: DateTime<Utc>) -> TrackerResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create backup directory: {}", e)))?;

        let filename = format!("{}{}.json", FILE_PREFIX, now.format(TIMESTAMP_FORMAT));
        let backup_path = self.backup_dir.join(filename);

        let json = serde_json::to_string_pretty(&BackupArchive::new(ledger, now))
            .map_err(|e| TrackerError::Json(format!("Failed to serialize backup: {}", e)))?;
        fs::write(&backup_path, json)
            .map_err(|e| TrackerError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// Create a backup and then prune old ones
    pub fn create_backup_with_retention(
        &self,
        ledger: &Ledger,
        now: DateTime<Utc>,
    ) -> TrackerResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup(ledger, now)?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// All backups, newest first
    pub fn list_backups(&self) -> TrackerResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        let entries = fs::read_dir(&self.backup_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to read backup directory: {}", e)))?;
        for entry in entries {
            let entry = entry
                .map_err(|e| TrackerError::Io(format!("Failed to read directory entry: {}", e)))?;
            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mark_monthly(&mut backups);
        Ok(backups)
    }

    /// Delete backups beyond the daily and monthly quotas
    pub fn enforce_retention(&self) -> TrackerResult<Vec<PathBuf>> {
        let (monthly, daily): (Vec<_>, Vec<_>) =
            self.list_backups()?.into_iter().partition(|b| b.is_monthly);

        let expired = daily
            .into_iter()
            .skip(self.retention.daily_count as usize)
            .chain(monthly.into_iter().skip(self.retention.monthly_count as usize));

        let mut deleted = Vec::new();
        for backup in expired {
            fs::remove_file(&backup.path)
                .map_err(|e| TrackerError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Look up a backup by filename
    pub fn get_backup(&self, filename: &str) -> TrackerResult<Option<BackupInfo>> {
        Ok(self
            .list_backups()?
            .into_iter()
            .find(|b| b.filename == filename))
    }

    pub fn get_latest_backup(&self) -> TrackerResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_str()?.to_string();
    let stamp = filename.strip_prefix(FILE_PREFIX)?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
        is_monthly: false,
    })
}

/// `backups` must be sorted newest first
fn mark_monthly(backups: &mut [BackupInfo]) {
    let mut seen = HashSet::new();
    for backup in backups.iter_mut().rev() {
        backup.is_monthly = seen.insert(MonthKey::from_date(backup.created_at.date_naive()));
    }
}

fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};
    use tempfile::TempDir;

    fn create_test_manager() -> (BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let retention = BackupRetention {
            daily_count: 3,
            monthly_count: 2,
        };
        (BackupManager::new(&paths, retention), temp_dir)
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_create_backup() {
        let (manager, _temp) = create_test_manager();

        let path = manager.create_backup(&Ledger::default(), at(5, 9)).unwrap();

        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "backup-20240305-090000-000.json"
        );
    }

    #[test]
    fn test_archive_contents() {
        let (manager, _temp) = create_test_manager();
        let path = manager.create_backup(&Ledger::default(), at(5, 9)).unwrap();

        let archive: BackupArchive =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(archive.schema_version, BACKUP_SCHEMA_VERSION);
        assert_eq!(archive.created_at, at(5, 9));
        assert!(archive.into_ledger().is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let (manager, _temp) = create_test_manager();
        manager.create_backup(&Ledger::default(), at(5, 9)).unwrap();
        manager.create_backup(&Ledger::default(), at(6, 9)).unwrap();
        fs::write(manager.backup_dir().join("notes.txt"), "ignored").unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].created_at.day(), 6);
        assert!(!backups[0].is_monthly);
        assert!(backups[1].is_monthly);
    }

    #[test]
    fn test_retention_policy() {
        let (manager, _temp) = create_test_manager();
        for day in 1..=6 {
            manager.create_backup(&Ledger::default(), at(day, 9)).unwrap();
        }

        let deleted = manager.enforce_retention().unwrap();
        // One monthly (Mar 1) plus the three newest dailies survive
        assert_eq!(deleted.len(), 2);

        let remaining: Vec<u32> = manager
            .list_backups()
            .unwrap()
            .iter()
            .map(|b| b.created_at.day())
            .collect();
        assert_eq!(remaining, vec![6, 5, 4, 1]);
    }

    #[test]
    fn test_monthly_quota() {
        let (manager, _temp) = create_test_manager();
        let start = at(1, 0);
        for months in 0..4 {
            manager
                .create_backup(&Ledger::default(), start + Duration::days(31 * months))
                .unwrap();
        }

        manager.enforce_retention().unwrap();
        let monthly = manager
            .list_backups()
            .unwrap()
            .into_iter()
            .filter(|b| b.is_monthly)
            .count();
        assert_eq!(monthly, 2);
    }

    #[test]
    fn test_get_latest_and_by_name() {
        let (manager, _temp) = create_test_manager();
        assert!(manager.get_latest_backup().unwrap().is_none());

        let path = manager.create_backup(&Ledger::default(), at(5, 9)).unwrap();
        let latest = manager.get_latest_backup().unwrap().unwrap();
        assert_eq!(latest.path, path);

        let found = manager.get_backup(&latest.filename).unwrap();
        assert_eq!(found, Some(latest));
        assert!(manager.get_backup("backup-nope.json").unwrap().is_none());
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let ts = parse_backup_timestamp("20251127-143022-456").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 11, 27));
        assert_eq!(ts.timestamp_subsec_millis(), 456);
        assert!(parse_backup_timestamp("20251127").is_none());
    }
}
