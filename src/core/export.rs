use crate::core::fake_notes::fake_note_table;
use crate::core::history::SessionHistory;
use crate::domain::ports::{ExportFormat, Storage};
use crate::utils::error::{DepositError, Result};
use serde::Serialize;

pub const HISTORY_CSV: &str = "session_history.csv";
pub const HISTORY_JSON: &str = "session_history.json";
pub const FAKE_NOTES_CSV: &str = "fake_notes.csv";

/// Column names match the serde renames on `HistoryEntry` and `FakeNoteEntry`.
pub const HISTORY_HEADERS: [&str; 4] = ["Name", "Serial Number", "Status", "Checked At"];
pub const FAKE_NOTE_HEADERS: [&str; 2] = ["Denomination", "Fake Notes"];

pub struct SessionExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the session history (and, for CSV, the fake-note table) in every
    /// requested format. Returns the written file names.
    pub async fn export(
        &self,
        history: &SessionHistory,
        formats: &[ExportFormat],
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in formats {
            match format {
                ExportFormat::Csv => {
                    let history_csv = to_csv(&HISTORY_HEADERS, history.entries())?;
                    self.storage.write_file(HISTORY_CSV, &history_csv).await?;
                    written.push(HISTORY_CSV.to_string());

                    let fake_notes_csv = to_csv(&FAKE_NOTE_HEADERS, fake_note_table())?;
                    self.storage.write_file(FAKE_NOTES_CSV, &fake_notes_csv).await?;
                    written.push(FAKE_NOTES_CSV.to_string());
                }
                ExportFormat::Json => {
                    let json = serde_json::to_vec_pretty(history.entries())?;
                    self.storage.write_file(HISTORY_JSON, &json).await?;
                    written.push(HISTORY_JSON.to_string());
                }
            }
        }

        tracing::info!(
            entries = history.len(),
            files = written.len(),
            "session exported"
        );
        Ok(written)
    }
}

// The header is written up front so an empty history still yields a parseable file.
fn to_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| DepositError::IoError(e.into_error()))
}
