use anyhow::Result;
use clap::{Parser, Subcommand};

use money_tracker::audit::AuditLogger;
use money_tracker::cli::{
    handle_audit_command, handle_backup_command, handle_config_command, handle_export_command,
    handle_investment_command, handle_report_command, handle_summary_command,
    handle_transaction_command,
};
use money_tracker::config::{Settings, TrackerPaths};
use money_tracker::state::AppState;
use money_tracker::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "moneytracker",
    version,
    about = "Personal income, expense and investment tracker",
    long_about = "MoneyTracker records income, expenses and investment holdings and \
                  reports period totals, category breakdowns, monthly trends, \
                  financial health ratios and portfolio performance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(money_tracker::cli::TransactionCommands),

    /// Investment management commands
    #[command(subcommand, alias = "inv")]
    Investment(money_tracker::cli::InvestmentCommands),

    /// Show headline totals for a period
    Summary(money_tracker::cli::SummaryArgs),

    /// Full analytics report
    Report(money_tracker::cli::ReportArgs),

    /// Backup management commands
    #[command(subcommand)]
    Backup(money_tracker::cli::BackupCommands),

    /// Export data as CSV, JSON or YAML
    Export(money_tracker::cli::ExportArgs),

    /// Show recent audit log entries
    Audit(money_tracker::cli::AuditArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut state = AppState::load(JsonStore::new(&paths))?
        .with_audit(AuditLogger::new(paths.audit_log()));

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut state, &paths, &settings, cmd)?;
        }
        Some(Commands::Investment(cmd)) => {
            handle_investment_command(&mut state, &paths, &settings, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&state, &settings, args)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&state, &settings, args)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&state, &paths, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&state, args)?;
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&paths, args)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            println!("MoneyTracker - income, expense and investment tracking");
            println!();
            println!("Run 'moneytracker --help' for usage information.");
        }
    }

    Ok(())
}
