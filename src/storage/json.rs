//! JSON file store
//!
//! Keeps transactions in `transactions.json` and holdings in
//! `investments.json` under the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::{Investment, Ledger, Transaction};

use super::file_io::{read_json, write_json_atomic};
use super::Store;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct InvestmentData {
    #[serde(default)]
    investments: Vec<Investment>,
}

/// Borrowed twin of the file layout, so saving does not clone the ledger
#[derive(Serialize)]
struct TransactionDataRef<'a> {
    transactions: &'a [Transaction],
}

#[derive(Serialize)]
struct InvestmentDataRef<'a> {
    investments: &'a [Investment],
}

/// Store backed by two JSON files
#[derive(Debug, Clone)]
pub struct JsonStore {
    transactions_path: PathBuf,
    investments_path: PathBuf,
}

impl JsonStore {
    pub fn new(paths: &TrackerPaths) -> Self {
        Self {
            transactions_path: paths.transactions_file(),
            investments_path: paths.investments_file(),
        }
    }

    pub fn transactions_path(&self) -> &PathBuf {
        &self.transactions_path
    }

    pub fn investments_path(&self) -> &PathBuf {
        &self.investments_path
    }
}

impl Store for JsonStore {
    fn load(&self) -> TrackerResult<Ledger> {
        let transactions: TransactionData = read_json(&self.transactions_path)?;
        let investments: InvestmentData = read_json(&self.investments_path)?;
        Ok(Ledger::new(transactions.transactions, investments.investments))
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        write_json_atomic(
            &self.transactions_path,
            &TransactionDataRef {
                transactions: &ledger.transactions,
            },
        )?;
        write_json_atomic(
            &self.investments_path,
            &InvestmentDataRef {
                investments: &ledger.investments,
            },
        )
    }
}
