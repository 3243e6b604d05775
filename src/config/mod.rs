pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::ExportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

/// Command line flags. Flags that are given win over the `--config` file;
/// flags that are left out fall back to the file, then to the defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "daily-deposit")]
#[command(about = "Daily deposit calculator with fake-note serial checks")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Currency symbol for amounts [default: ₹]
    #[arg(long)]
    pub currency: Option<String>,

    /// Directory for session exports [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Export the session history when the session ends (csv, json)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub export: Option<Vec<ExportFormat>>,

    /// Print only the predicted fake-note count for one denomination
    #[arg(long)]
    pub denomination: Option<u32>,

    /// Print each report as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the `--config` file (or defaults) and applies the explicit flags on top.
    pub fn merged(&self) -> Result<TomlConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.apply_overrides(file))
    }

    pub fn apply_overrides(&self, mut config: TomlConfig) -> TomlConfig {
        if let Some(currency) = &self.currency {
            config.session.currency_symbol = currency.clone();
        }
        if let Some(path) = &self.output_path {
            config.export.output_path = path.clone();
        }
        if let Some(formats) = &self.export {
            config.export.formats = formats.clone();
        }
        config
    }
}
