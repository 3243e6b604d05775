use crate::domain::model::{HistoryEntry, SerialNumber, SerialStatus};
use chrono::Utc;

/// Append-only record of the serials checked during one session.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, serial_number: &SerialNumber, status: SerialStatus) {
        self.entries.push(HistoryEntry {
            name: name.to_string(),
            serial_number: serial_number.clone(),
            status,
            checked_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flagged_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status.is_suspicious())
            .count()
    }
}
