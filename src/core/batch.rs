use crate::domain::model::DepositRequest;
use crate::utils::error::{DepositError, Result};
use std::io::Read;

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "name",
    "daily_deposit",
    "interest_rate",
    "maturity_days",
    "serial_number",
];

/// Reads submissions from CSV, one result per data row, in file order.
///
/// A missing column fails the whole file; a malformed row only fails its own
/// entry so the rest of the batch can still run.
pub fn read_requests<R: Read>(reader: R) -> Result<Vec<Result<DepositRequest>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DepositError::ParseInputError {
                field: format!("CSV header column '{}'", column),
                value: headers.iter().collect::<Vec<_>>().join(","),
            });
        }
    }

    let rows: Vec<Result<DepositRequest>> = reader
        .deserialize::<DepositRequest>()
        .map(|row| row.map_err(DepositError::from))
        .collect();

    tracing::debug!(rows = rows.len(), "submissions read");
    Ok(rows)
}
