use crate::domain::model::FakeNoteEntry;

pub const FAKE_NOTE_REPORT_TITLE: &str =
    "Fake Currency Note Report in 2025 (Predicted from Govt Data)";

/// Predicted fake-note counts per denomination, highest denomination first.
///
/// Static reference data for display only; it does not depend on any submission.
pub const FAKE_NOTE_TABLE: [FakeNoteEntry; 7] = [
    FakeNoteEntry { denomination: 2000, fake_notes: 444_023 },
    FakeNoteEntry { denomination: 500, fake_notes: 383_842 },
    FakeNoteEntry { denomination: 200, fake_notes: 36_913 },
    FakeNoteEntry { denomination: 100, fake_notes: 17_245 },
    FakeNoteEntry { denomination: 50, fake_notes: 22_652 },
    FakeNoteEntry { denomination: 20, fake_notes: 0 },
    FakeNoteEntry { denomination: 10, fake_notes: 3_241 },
];

pub fn fake_note_table() -> &'static [FakeNoteEntry] {
    &FAKE_NOTE_TABLE
}

pub fn predicted_fake_notes(denomination: u32) -> Option<u64> {
    FAKE_NOTE_TABLE
        .iter()
        .find(|entry| entry.denomination == denomination)
        .map(|entry| entry.fake_notes)
}

pub fn max_fake_notes() -> u64 {
    FAKE_NOTE_TABLE
        .iter()
        .map(|entry| entry.fake_notes)
        .max()
        .unwrap_or(0)
}
