//! CSV export of ledger records.

use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::{errors::LedgerError, ledger::Ledger};

const HEADER: [&str; 5] = ["ID", "Amount", "Category", "Date", "Type"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes the ledger as comma-separated text at `path`, overwriting any
/// existing file, and returns the number of data rows written.
///
/// Amounts carry exactly two decimal digits and dates are `YYYY-MM-DD`.
/// Failures surface as [`LedgerError`]; nothing is retried.
pub fn write_csv(ledger: &Ledger, path: &Path) -> Result<usize, LedgerError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for record in ledger.iter() {
        writer.write_record([
            record.id.to_string(),
            format!("{:.2}", record.amount),
            record.category.clone(),
            record.date.format(DATE_FORMAT).to_string(),
            record.kind.as_str().to_string(),
        ])?;
        rows += 1;
    }
    writer.flush()?;
    info!(rows, path = %path.display(), "ledger exported");
    Ok(rows)
}
