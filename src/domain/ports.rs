use crate::domain::model::{SerialNumber, SerialStatus};
use crate::utils::error::Result;

/// A registry of note serials already seen in this session.
///
/// `check_and_register` must be atomic: two callers racing on the same
/// serial can never both observe `Accepted`.
pub trait SerialStore: Send + Sync {
    fn check_and_register(&self, serial: &SerialNumber) -> SerialStatus;
    fn contains(&self, serial: &SerialNumber) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: SerialStore + ?Sized> SerialStore for std::sync::Arc<T> {
    fn check_and_register(&self, serial: &SerialNumber) -> SerialStatus {
        (**self).check_and_register(serial)
    }

    fn contains(&self, serial: &SerialNumber) -> bool {
        (**self).contains(serial)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn currency_symbol(&self) -> &str;
    fn output_path(&self) -> &str;
    fn export_formats(&self) -> &[ExportFormat];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}
