use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw form submission, exactly as the customer typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    #[serde(rename = "name")]
    pub customer_name: String,
    pub daily_deposit: f64,
    pub interest_rate: f64,
    pub maturity_days: i64,
    pub serial_number: String,
}

/// A currency-note serial: exactly 10 characters of `[A-Z0-9]`.
///
/// Only the validator constructs one, so holding a `SerialNumber` means the
/// value is already trimmed, upper-cased and shape-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated numeric inputs plus the normalized serial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedInput {
    pub daily_deposit: f64,
    pub interest_rate: f64,
    pub maturity_days: u64,
    pub serial_number: SerialNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub investment_amount: f64,
    pub total_return: f64,
    pub bank_interest_cost: f64,
    pub agency_cost: f64,
    pub hardware_cost: f64,
    pub total_bank_cost: f64,
}

impl LedgerReport {
    pub fn is_finite(&self) -> bool {
        [
            self.investment_amount,
            self.total_return,
            self.bank_interest_cost,
            self.agency_cost,
            self.hardware_cost,
            self.total_bank_cost,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerialStatus {
    Accepted,
    #[serde(rename = "Fake/Registered")]
    FakeOrRegistered,
}

impl SerialStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SerialStatus::Accepted => "Accepted",
            SerialStatus::FakeOrRegistered => "Fake/Registered",
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(self, SerialStatus::FakeOrRegistered)
    }
}

impl fmt::Display for SerialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Serial Number")]
    pub serial_number: SerialNumber,
    #[serde(rename = "Status")]
    pub status: SerialStatus,
    #[serde(rename = "Checked At")]
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FakeNoteEntry {
    #[serde(rename = "Denomination")]
    pub denomination: u32,
    #[serde(rename = "Fake Notes")]
    pub fake_notes: u64,
}

/// Everything the presentation layer needs after an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    pub customer_name: String,
    pub serial_number: SerialNumber,
    pub status: SerialStatus,
    pub report: LedgerReport,
}
