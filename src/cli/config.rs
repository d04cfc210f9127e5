//! Config command: show paths and settings

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

pub fn handle_config_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    println!("MoneyTracker Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Backup directory: {}", paths.backup_dir().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Default period:  {}", settings.default_period);
    println!("  Backup on write: {}", settings.backup_on_write);
    println!(
        "  Backup retention: {} daily, {} monthly",
        settings.backup_retention.daily_count, settings.backup_retention.monthly_count
    );

    Ok(())
}
