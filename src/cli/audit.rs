//! Audit command: print recent log entries

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

pub fn handle_audit_command(paths: &TrackerPaths, args: AuditArgs) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
