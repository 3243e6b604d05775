pub mod batch;
pub mod export;
pub mod fake_notes;
pub mod history;
pub mod ledger;
pub mod registry;
pub mod session;
pub mod validator;

pub use crate::domain::model::{
    DepositRequest, FakeNoteEntry, HistoryEntry, LedgerReport, NormalizedInput, SerialNumber,
    SerialStatus, SubmissionOutcome,
};
pub use crate::domain::ports::{ConfigProvider, ExportFormat, SerialStore, Storage};
pub use crate::utils::error::Result;
