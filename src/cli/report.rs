//! CLI commands for reports
//!
//! `report` prints the full analytics report or writes it to CSV; `summary`
//! prints the headline figures only.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::config::Settings;
use crate::display::summary::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::models::ReportPeriod;
use crate::reports::{
    filter_by_period, period_totals, portfolio_summary, total_investment, AnalyticsReport,
};
use crate::state::AppState;
use crate::storage::Store;

use super::parse_period;

/// Arguments for the analytics report
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Reporting period (monthly, last-month, quarterly, yearly, all)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the summary
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Reporting period (monthly, last-month, quarterly, yearly, all)
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Handle the report command
pub fn handle_report_command<S: Store>(
    state: &AppState<S>,
    settings: &Settings,
    args: ReportArgs,
) -> TrackerResult<()> {
    let period = resolve_period(args.period.as_deref(), settings)?;
    let today = Utc::now().date_naive();

    let report =
        AnalyticsReport::generate(state.transactions(), state.investments(), period, today);

    if let Some(output_path) = args.output {
        let file = File::create(&output_path)
            .map_err(|e| TrackerError::Export(format!("Failed to create file: {}", e)))?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Report exported to: {}", output_path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Handle the summary command
pub fn handle_summary_command<S: Store>(
    state: &AppState<S>,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let period = resolve_period(args.period.as_deref(), settings)?;
    let today = Utc::now().date_naive();

    let in_period = filter_by_period(state.transactions(), period, today);
    let totals = period_totals(&in_period);
    let invested = total_investment(state.transactions(), state.investments());
    let portfolio = portfolio_summary(state.investments());

    println!(
        "{}",
        format_summary(period, &totals, invested, &portfolio, &settings.currency_symbol)
    );

    Ok(())
}

fn resolve_period(period: Option<&str>, settings: &Settings) -> TrackerResult<ReportPeriod> {
    match period {
        Some(p) => parse_period(p),
        None => Ok(settings.default_period),
    }
}
