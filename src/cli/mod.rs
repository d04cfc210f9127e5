//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod backup;
pub mod config;
pub mod export;
pub mod investment;
pub mod report;
pub mod transaction;

pub use audit::{handle_audit_command, AuditArgs};
pub use backup::{handle_backup_command, BackupCommands};
pub use config::handle_config_command;
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_report_command, handle_summary_command, ReportArgs, SummaryArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{NaiveDate, Utc};

use crate::backup::BackupManager;
use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, ReportPeriod};
use crate::state::AppState;
use crate::storage::Store;

/// Parse a user-entered amount
pub(crate) fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

pub(crate) fn parse_period(s: &str) -> TrackerResult<ReportPeriod> {
    ReportPeriod::parse(s).ok_or_else(|| {
        TrackerError::Validation(format!(
            "Invalid period '{}'. Use monthly, last-month, quarterly, yearly or all.",
            s
        ))
    })
}

/// Snapshot the ledger before a mutating command when the settings ask for it
pub(crate) fn backup_before_write<S: Store>(
    paths: &TrackerPaths,
    settings: &Settings,
    state: &AppState<S>,
) -> TrackerResult<()> {
    if settings.backup_on_write {
        let manager = BackupManager::new(paths, settings.backup_retention.clone());
        manager.create_backup_with_retention(state.ledger(), Utc::now())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("45.50").unwrap(), Money::from_cents(4_550));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("last-month").unwrap(), ReportPeriod::LastMonth);
        assert!(parse_period("weekly").is_err());
    }

    #[test]
    fn test_backup_before_write_respects_setting() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let state = AppState::load(MemoryStore::new()).unwrap();
        let manager = BackupManager::new(&paths, Default::default());

        let mut settings = Settings::default();
        backup_before_write(&paths, &settings, &state).unwrap();
        assert!(manager.list_backups().unwrap().is_empty());

        settings.backup_on_write = true;
        backup_before_write(&paths, &settings, &state).unwrap();
        assert_eq!(manager.list_backups().unwrap().len(), 1);
    }
}
