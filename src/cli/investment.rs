//! Investment CLI commands

use chrono::Utc;
use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::display::investment::{format_investment_table, format_value_change};
use crate::display::report::format_return;
use crate::error::TrackerResult;
use crate::models::{InvestmentId, NewInvestment};
use crate::reports::portfolio_summary;
use crate::services::InvestmentService;
use crate::state::AppState;
use crate::storage::Store;

use super::{backup_before_write, parse_amount, parse_date};

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Add a holding
    Add {
        /// Holding type (e.g., stocks, crypto, gold)
        kind: String,
        /// Holding name
        name: String,
        /// Amount invested
        amount: String,
        /// Current value, defaults to the amount invested
        #[arg(short, long)]
        current: Option<String>,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List holdings with profit and return
    List,
    /// Record a new current value for a holding
    Update {
        /// Investment ID
        id: InvestmentId,
        /// New current value
        value: String,
    },
    /// Delete a holding
    Delete {
        /// Investment ID
        id: InvestmentId,
    },
}

/// Handle an investment command
pub fn handle_investment_command<S: Store>(
    state: &mut AppState<S>,
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: InvestmentCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        InvestmentCommands::Add {
            kind,
            name,
            amount,
            current,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Utc::now().date_naive(),
            };

            let mut input = NewInvestment::new(kind, name, amount, date);
            if let Some(current) = current {
                input = input.with_current(parse_amount(&current)?);
            }

            backup_before_write(paths, settings, state)?;
            let inv = InvestmentService::new(state).create(input)?;
            println!(
                "Added investment {} ({}): {}",
                inv.id,
                inv.name,
                inv.current_amount.format_with_symbol(symbol)
            );
        }

        InvestmentCommands::List => {
            let service = InvestmentService::new(state);
            let investments = service.list();
            println!("{}", format_investment_table(investments, symbol));

            if !investments.is_empty() {
                let summary = portfolio_summary(investments);
                println!(
                    "Total: {} invested, {} current, {} profit ({})",
                    summary.total_initial.format_with_symbol(symbol),
                    summary.total_current.format_with_symbol(symbol),
                    summary.total_profit.format_with_symbol(symbol),
                    format_return(summary.total_return_percent)
                );
            }
        }

        InvestmentCommands::Update { id, value } => {
            let value = parse_amount(&value)?;

            backup_before_write(paths, settings, state)?;
            let mut service = InvestmentService::new(state);
            let change = service.update_value(id, value)?;
            let name = service
                .get(id)
                .map(|inv| inv.name.clone())
                .unwrap_or_else(|| id.to_string());
            println!("{}", format_value_change(&name, &change, symbol));
        }

        InvestmentCommands::Delete { id } => {
            backup_before_write(paths, settings, state)?;
            let inv = InvestmentService::new(state).delete(id)?;
            println!("Deleted investment {} ({})", inv.id, inv.name);
        }
    }

    Ok(())
}
