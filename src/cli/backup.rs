//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::backup::{BackupManager, RestoreManager};
use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::state::AppState;
use crate::storage::Store;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups, newest first
    List,

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Delete old backups according to retention policy
    Prune,
}

#[derive(Tabled)]
struct BackupRow {
    #[tabled(rename = "File")]
    filename: String,
    #[tabled(rename = "Created (UTC)")]
    created: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Kept As")]
    kept_as: String,
}

/// Handle a backup command
pub fn handle_backup_command<S: Store>(
    state: &AppState<S>,
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> TrackerResult<()> {
    let manager = BackupManager::new(paths, settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let (backup_path, pruned) =
                manager.create_backup_with_retention(state.ledger(), Utc::now())?;
            println!("Backup created: {}", file_name(&backup_path));
            println!("Location: {}", backup_path.display());
            if !pruned.is_empty() {
                println!("Pruned {} old backup(s).", pruned.len());
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: moneytracker backup create");
                return Ok(());
            }

            let rows = backups.iter().map(|backup| BackupRow {
                filename: backup.filename.clone(),
                created: backup.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                size: format_size(backup.size_bytes),
                kept_as: if backup.is_monthly { "monthly" } else { "daily" }.to_string(),
            });
            let mut table = Table::new(rows);
            table.with(Style::rounded());

            println!("{}", table);
            println!("Total: {} backup(s) in {}", backups.len(), manager.backup_dir().display());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;

            let restore_manager = RestoreManager::new(state.store());
            let validation = restore_manager.validate_backup(&backup_path)?;

            println!("Backup Information");
            println!("==================");
            println!("File: {}", backup_path.display());
            println!(
                "Created: {}",
                validation.backup_date.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("Schema version: {}", validation.schema_version);
            println!(
                "Contents: {} transaction(s), {} investment(s)",
                validation.transaction_count, validation.investment_count
            );
            println!();

            if !force {
                println!("WARNING: This will overwrite ALL current data!");
                println!("To proceed, run again with --force flag:");
                println!("  moneytracker backup restore {} --force", backup);
                return Ok(());
            }

            let pre_restore = manager.create_backup(state.ledger(), Utc::now())?;
            println!("Pre-restore backup saved: {}", file_name(&pre_restore));

            let result = restore_manager.restore_from_file(&backup_path)?;
            println!("Restore complete!");
            println!("{}", result.summary());
        }

        BackupCommands::Prune => {
            let deleted = manager.enforce_retention()?;
            println!(
                "Retention policy: {} daily, {} monthly",
                settings.backup_retention.daily_count, settings.backup_retention.monthly_count
            );
            println!("Deleted {} backup(s).", deleted.len());
        }
    }

    Ok(())
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(manager: &BackupManager, backup: &str) -> TrackerResult<PathBuf> {
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| TrackerError::NotFound {
                entity_type: "Backup",
                identifier: "latest".to_string(),
            });
    }

    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    if let Some(info) = manager.get_backup(backup)? {
        return Ok(info.path);
    }

    if let Some(info) = manager.get_backup(&format!("{}.json", backup))? {
        return Ok(info.path);
    }

    Err(TrackerError::NotFound {
        entity_type: "Backup",
        identifier: backup.to_string(),
    })
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_size(bytes: u64) -> String {
    match bytes {
        0..=1023 => format!("{} B", bytes),
        1024..=1_048_575 => format!("{:.1} KB", bytes as f64 / 1024.0),
        _ => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
    }
}
