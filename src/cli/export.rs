//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, ValueEnum};

use crate::error::{TrackerError, TrackerResult};
use crate::export::{
    export_full_json, export_full_yaml, export_investments_csv, export_transactions_csv,
};
use crate::state::AppState;
use crate::storage::Store;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one collection)
    Csv,
    /// JSON format (everything)
    Json,
    /// YAML format (everything, human-readable)
    Yaml,
}

/// Which collection a CSV export holds
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CsvContent {
    #[default]
    Transactions,
    Investments,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Collection to write when exporting CSV
    #[arg(long, value_enum, default_value = "transactions")]
    pub what: CsvContent,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command<S: Store>(state: &AppState<S>, args: ExportArgs) -> TrackerResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| TrackerError::Export(format!("Failed to create file: {}", e)))?;
            let mut writer = BufWriter::new(file);
            write_export(state, &args, &mut writer)?;
            writer.flush()?;
            println!("Exported {} to: {}", describe(&args), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(state, &args, &mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_export<S: Store, W: Write>(
    state: &AppState<S>,
    args: &ExportArgs,
    writer: &mut W,
) -> TrackerResult<()> {
    match (args.format, args.what) {
        (ExportFormat::Csv, CsvContent::Transactions) => {
            export_transactions_csv(state.transactions(), writer)
        }
        (ExportFormat::Csv, CsvContent::Investments) => {
            export_investments_csv(state.investments(), writer)
        }
        (ExportFormat::Json, _) => export_full_json(state.ledger(), Utc::now(), writer, args.pretty),
        (ExportFormat::Yaml, _) => export_full_yaml(state.ledger(), Utc::now(), writer),
    }
}

fn describe(args: &ExportArgs) -> &'static str {
    match (args.format, args.what) {
        (ExportFormat::Csv, CsvContent::Transactions) => "transactions (CSV)",
        (ExportFormat::Csv, CsvContent::Investments) => "investments (CSV)",
        (ExportFormat::Json, _) => "all data (JSON)",
        (ExportFormat::Yaml, _) => "all data (YAML)",
    }
}
