//! YAML export for a human-readable copy of all data

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

pub fn export_full_yaml<W: Write>(
    ledger: &Ledger,
    exported_at: DateTime<Utc>,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = FullExport::from_ledger(ledger, exported_at);
    let export_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# MoneyTracker export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_yaml_export() {
        let mut buf = Vec::new();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        export_full_yaml(&Ledger::default(), at, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("# MoneyTracker export"));
        assert!(output.contains("transaction_count: 0"));

        let parsed: FullExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.schema_version, crate::export::EXPORT_SCHEMA_VERSION);
        assert!(parsed.investments.is_empty());
    }
}
