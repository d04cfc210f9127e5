//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: txn.kind.to_string(),
        category: truncate(&txn.category, 20),
        amount: txn.amount.format_with_symbol(currency_symbol),
        description: truncate(&txn.description, 30),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format one transaction for display after it was recorded
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Format the distinct category names, one per line
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories yet.".to_string();
    }
    categories.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::create(
            TransactionId::from_raw(1_700_000_000_000),
            NewTransaction::new(
                TransactionKind::Expense,
                "Food",
                Money::from_units(45_000),
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            )
            .with_description("Lunch"),
        )
        .unwrap()
    }

    #[test]
    fn test_table_contains_fields() {
        let table = format_transaction_table(&[sample()], "Rp", "%d/%m/%Y");
        assert!(table.contains("Category"));
        assert!(table.contains("1700000000000"));
        assert!(table.contains("10/01/2024"));
        assert!(table.contains("Rp45.000,00"));
        assert!(table.contains("Lunch"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], "Rp", "%d/%m/%Y"),
            "No transactions found."
        );
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&sample(), "$");
        assert!(details.contains("Type:        Expense"));
        assert!(details.contains("Amount:      $45.000,00"));
        assert!(details.contains("Description: Lunch"));
    }

    #[test]
    fn test_category_list() {
        let cats = vec!["Food".to_string(), "Salary".to_string()];
        assert_eq!(format_category_list(&cats), "Food\nSalary");
        assert_eq!(format_category_list(&[]), "No categories yet.");
    }
}
