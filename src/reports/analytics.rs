//! Analytics Report
//!
//! Bundles every aggregation for one period into a single report that can be
//! printed to the terminal or exported as CSV.

use std::io::Write;

use chrono::NaiveDate;

use crate::display::report::{format_bar, format_percentage, separator, double_separator, truncate};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, Money, ReportPeriod, Transaction, TransactionKind};

use super::breakdown::{breakdown_by_category, CategoryBreakdown};
use super::filter::filter_by_period;
use super::portfolio::{allocation_by_type, portfolio_summary, AllocationSlice, PortfolioSummary};
use super::ratios::{financial_ratios, FinancialRatios, RatioReading};
use super::totals::{period_totals, total_investment, PeriodTotals};
use super::trend::{monthly_trend, MonthSummary};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;

/// Everything the dashboard shows for one period
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub period: ReportPeriod,
    pub as_of: NaiveDate,
    pub transaction_count: usize,
    pub totals: PeriodTotals,
    /// Investment transactions plus holdings, over the whole history
    pub total_investment: Money,
    pub income_breakdown: Vec<CategoryBreakdown>,
    pub expense_breakdown: Vec<CategoryBreakdown>,
    /// Built from all transactions, not only the period
    pub trend: Vec<MonthSummary>,
    pub ratios: FinancialRatios,
    pub portfolio: PortfolioSummary,
    pub allocation: Vec<AllocationSlice>,
}

impl AnalyticsReport {
    pub fn generate(
        transactions: &[Transaction],
        investments: &[Investment],
        period: ReportPeriod,
        today: NaiveDate,
    ) -> Self {
        let in_period = filter_by_period(transactions, period, today);

        Self {
            period,
            as_of: today,
            transaction_count: in_period.len(),
            totals: period_totals(&in_period),
            total_investment: total_investment(transactions, investments),
            income_breakdown: breakdown_by_category(&in_period, TransactionKind::Income),
            expense_breakdown: breakdown_by_category(&in_period, TransactionKind::Expense),
            trend: monthly_trend(transactions),
            ratios: financial_ratios(transactions, investments, period, today),
            portfolio: portfolio_summary(investments),
            allocation: allocation_by_type(investments),
        }
    }

    /// Format the report for terminal display, printing amounts with
    /// `currency_symbol`
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Report: {} (as of {})\n",
            self.period, self.as_of
        ));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>20}\n", "Income", money(self.totals.income)));
        output.push_str(&format!("{:<24} {:>20}\n", "Expense", money(self.totals.expense)));
        output.push_str(&format!("{:<24} {:>20}\n", "Investment", money(self.totals.investment)));
        output.push_str(&format!("{:<24} {:>20}\n", "Balance", money(self.totals.balance)));
        output.push_str(&format!(
            "{:<24} {:>20}\n",
            "Total Invested",
            money(self.total_investment)
        ));
        output.push_str(&format!("{:<24} {:>20}\n", "Transactions", self.transaction_count));

        push_breakdown(&mut output, "Income by Category", &self.income_breakdown, currency_symbol);
        push_breakdown(&mut output, "Expense by Category", &self.expense_breakdown, currency_symbol);

        output.push_str("\nMonthly Trend\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.trend.is_empty() {
            output.push_str("  No transactions yet\n");
        }
        for month in &self.trend {
            output.push_str(&format!(
                "  {:<10} in {:>18}  out {:>18}  net {:>18}\n",
                month.label,
                money(month.income),
                money(month.expense),
                money(month.balance)
            ));
        }

        output.push_str("\nFinancial Health\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        push_ratio(&mut output, "Savings ratio", &self.ratios.savings_ratio, "%");
        push_ratio(&mut output, "Investment ratio", &self.ratios.investment_ratio, "%");
        push_ratio(&mut output, "Expense ratio", &self.ratios.expense_ratio, "%");
        push_ratio(
            &mut output,
            "Emergency fund",
            &self.ratios.emergency_fund_months,
            " months",
        );

        output.push_str("\nPortfolio\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  {:<22} {:>20}\n",
            "Initial",
            money(self.portfolio.total_initial)
        ));
        output.push_str(&format!(
            "  {:<22} {:>20}\n",
            "Current",
            money(self.portfolio.total_current)
        ));
        output.push_str(&format!(
            "  {:<22} {:>20} ({:+.2}%)\n",
            "Profit",
            money(self.portfolio.total_profit),
            self.portfolio.total_return_percent
        ));
        for slice in &self.allocation {
            output.push_str(&format!(
                "  {:<22} {:>20} {:>7}\n",
                truncate(&slice.kind, 22),
                money(slice.current),
                format_percentage(slice.percentage)
            ));
        }

        output
    }

    /// Export the report to CSV format
    ///
    /// One row per figure: section, label, amount and percentage.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| TrackerError::Export(e.to_string());

        csv.write_record(["Section", "Label", "Amount", "Percentage"])
            .map_err(export_err)?;

        let totals = [
            ("Income", self.totals.income),
            ("Expense", self.totals.expense),
            ("Investment", self.totals.investment),
            ("Balance", self.totals.balance),
            ("Total Invested", self.total_investment),
        ];
        for (label, amount) in totals {
            csv.write_record(["Totals", label, plain(amount).as_str(), ""])
                .map_err(export_err)?;
        }

        for row in &self.income_breakdown {
            csv.write_record([
                "Income",
                row.category.as_str(),
                plain(row.total).as_str(),
                format!("{:.1}", row.percentage).as_str(),
            ])
            .map_err(export_err)?;
        }
        for row in &self.expense_breakdown {
            csv.write_record([
                "Expense",
                row.category.as_str(),
                plain(row.total).as_str(),
                format!("{:.1}", row.percentage).as_str(),
            ])
            .map_err(export_err)?;
        }

        for month in &self.trend {
            let key = month.month.to_string();
            csv.write_record(["Trend Income", key.as_str(), plain(month.income).as_str(), ""])
                .map_err(export_err)?;
            csv.write_record(["Trend Expense", key.as_str(), plain(month.expense).as_str(), ""])
                .map_err(export_err)?;
        }

        let ratios = [
            ("Savings Ratio", self.ratios.savings_ratio.value),
            ("Investment Ratio", self.ratios.investment_ratio.value),
            ("Expense Ratio", self.ratios.expense_ratio.value),
            ("Emergency Fund Months", self.ratios.emergency_fund_months.value),
        ];
        for (label, value) in ratios {
            csv.write_record(["Ratio", label, "", format!("{:.1}", value).as_str()])
                .map_err(export_err)?;
        }

        csv.write_record([
            "Portfolio",
            "Profit",
            plain(self.portfolio.total_profit).as_str(),
            format!("{:.2}", self.portfolio.total_return_percent).as_str(),
        ])
        .map_err(export_err)?;

        csv.flush()?;
        Ok(())
    }
}

fn plain(amount: Money) -> String {
    format!("{:.2}", amount.as_f64())
}

fn push_breakdown(
    output: &mut String,
    title: &str,
    rows: &[CategoryBreakdown],
    currency_symbol: &str,
) {
    output.push_str(&format!("\n{}\n", title));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("  Nothing recorded\n");
        return;
    }

    for row in rows {
        output.push_str(&format!(
            "  {:<18} {:>20} {} {:>6}\n",
            truncate(&row.category, 18),
            row.total.format_with_symbol(currency_symbol),
            format_bar(row.percentage, 100.0, BAR_WIDTH),
            format_percentage(row.percentage)
        ));
    }
}

fn push_ratio(output: &mut String, label: &str, reading: &RatioReading, unit: &str) {
    output.push_str(&format!(
        "  {:<22} {:>8.1}{:<8} {:<8} (target {}{})\n",
        label, reading.value, unit, reading.health, reading.threshold, unit
    ));
}
