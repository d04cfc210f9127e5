//! Full JSON export with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, Ledger, Transaction};

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the tracker holds, plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transactions: Vec<Transaction>,
    pub investments: Vec<Investment>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub investment_count: usize,
    /// Earliest transaction date, if any
    pub earliest_transaction: Option<String>,
    /// Latest transaction date, if any
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_ledger(ledger: &Ledger, exported_at: DateTime<Utc>) -> Self {
        let dates = || ledger.transactions.iter().map(|t| t.date);

        let metadata = ExportMetadata {
            transaction_count: ledger.transactions.len(),
            investment_count: ledger.investments.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: ledger.transactions.clone(),
            investments: ledger.investments.clone(),
            metadata,
        }
    }
}

pub fn export_full_json<W: Write>(
    ledger: &Ledger,
    exported_at: DateTime<Utc>,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = FullExport::from_ledger(ledger, exported_at);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))
}
