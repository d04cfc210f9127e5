//! CSV export of transactions and holdings

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Investment, Transaction};

fn export_err(err: csv::Error) -> TrackerError {
    TrackerError::Export(err.to_string())
}

/// Write one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Type", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for txn in transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.as_f64()),
        ])
        .map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write one row per holding, with profit and return
pub fn export_investments_csv<W: Write>(
    investments: &[Investment],
    writer: &mut W,
) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Type",
        "Name",
        "Date",
        "Initial Amount",
        "Current Amount",
        "Profit",
        "Return %",
        "Updated At",
    ])
    .map_err(export_err)?;

    for inv in investments {
        csv.write_record([
            inv.id.to_string(),
            inv.kind.clone(),
            inv.name.clone(),
            inv.date.to_string(),
            format!("{:.2}", inv.initial_amount.as_f64()),
            format!("{:.2}", inv.current_amount.as_f64()),
            format!("{:.2}", inv.profit().as_f64()),
            format!("{:.2}", inv.return_percent()),
            inv.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ])
        .map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}
