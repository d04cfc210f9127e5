//! Transaction CLI commands
//!
//! Implements CLI commands for recording and browsing income, expenses and
//! investment contributions.

use chrono::Utc;
use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::display::transaction::{
    format_category_list, format_transaction_details, format_transaction_table,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{NewTransaction, TransactionId, TransactionKind};
use crate::services::{TransactionFilter, TransactionService};
use crate::state::AppState;
use crate::storage::Store;

use super::{backup_before_write, parse_amount, parse_date, parse_period};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Kind: income, expense or investment
        kind: String,
        /// Amount (e.g., "150000" or "45.50")
        amount: String,
        /// Category name
        category: String,
        /// Free-form description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Search category and description
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Filter by kind
        #[arg(short, long)]
        kind: Option<String>,
        /// Restrict to a reporting period
        #[arg(short, long)]
        period: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
    /// List the categories in use
    Categories,
}

/// Handle a transaction command
pub fn handle_transaction_command<S: Store>(
    state: &mut AppState<S>,
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Invalid transaction type '{}'. Use income, expense or investment.",
                    kind
                ))
            })?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Utc::now().date_naive(),
            };

            let mut input = NewTransaction::new(kind, category, amount, date);
            if let Some(description) = description {
                input = input.with_description(description);
            }

            backup_before_write(paths, settings, state)?;
            let txn = TransactionService::new(state).create(input)?;

            println!("Recorded transaction {}", txn.id);
            println!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            period,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(kind) = kind {
                let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                    TrackerError::Validation(format!("Invalid transaction type '{}'", kind))
                })?;
                filter = filter.kind(kind);
            }
            if let Some(period) = period {
                filter = filter.period(parse_period(&period)?);
            }

            let service = TransactionService::new(state);
            let transactions = service.list(&filter);
            println!(
                "{}",
                format_transaction_table(&transactions, symbol, &settings.date_format)
            );
            println!(
                "Showing {} of {} transaction(s)",
                transactions.len(),
                service.count()
            );
        }

        TransactionCommands::Show { id } => {
            let service = TransactionService::new(state);
            let txn = service
                .get(id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
            println!("{}", format_transaction_details(txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            backup_before_write(paths, settings, state)?;
            let txn = TransactionService::new(state).delete(id)?;
            println!(
                "Deleted transaction {} ({} {} on {})",
                txn.id,
                txn.category,
                txn.amount.format_with_symbol(symbol),
                txn.date
            );
        }

        TransactionCommands::Categories => {
            let service = TransactionService::new(state);
            println!("{}", format_category_list(&service.categories()));
        }
    }

    Ok(())
}
