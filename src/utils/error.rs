use thiserror::Error;

/// User-input failures. Raised before the registry or the calculator is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Input can't be negative: {field}")]
    NegativeInput { field: &'static str },

    #[error("Input must be a finite number: {field}")]
    NonFiniteInput { field: &'static str },

    #[error("Inputs are too large to compute a {field}")]
    OutOfRange { field: &'static str },

    #[error("Serial number cannot be empty")]
    EmptySerial,

    #[error("Serial number must be exactly 10 alphanumeric characters (A-Z, 0-9): {serial}")]
    InvalidSerialFormat { serial: String },
}

#[derive(Error, Debug)]
pub enum DepositError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not read {field} from '{value}'")]
    ParseInputError { field: String, value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DepositError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DepositError::Validation(_) | DepositError::ParseInputError { .. } => {
                ErrorCategory::Input
            }
            DepositError::ConfigError { .. } | DepositError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            DepositError::CsvError(_)
            | DepositError::IoError(_)
            | DepositError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => match self {
                DepositError::CsvError(_) => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DepositError::Validation(ValidationError::NegativeInput { .. }) => {
                "Input can't be negative. Please enter positive values.".to_string()
            }
            DepositError::Validation(ValidationError::NonFiniteInput { field }) => {
                format!("The {} must be a regular number.", field)
            }
            DepositError::Validation(ValidationError::OutOfRange { .. }) => {
                "Amount, rate or days are too large to calculate.".to_string()
            }
            DepositError::Validation(ValidationError::EmptySerial) => {
                "Serial number cannot be empty.".to_string()
            }
            DepositError::Validation(ValidationError::InvalidSerialFormat { .. }) => {
                "Serial number must be exactly 10 alphanumeric characters (A-Z, 0-9).".to_string()
            }
            DepositError::ParseInputError { field, value } => {
                format!("'{}' is not a valid number for {}.", value, field)
            }
            DepositError::CsvError(e) => format!("Could not process the CSV data: {}", e),
            DepositError::IoError(e) => format!("File system error: {}", e),
            DepositError::SerializationError(e) => format!("Could not encode the report: {}", e),
            DepositError::ConfigError { message } => format!("Configuration problem: {}", message),
            DepositError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DepositError::Validation(ValidationError::NegativeInput { .. })
            | DepositError::Validation(ValidationError::NonFiniteInput { .. }) => {
                "Enter zero or a positive amount, rate and number of days"
            }
            DepositError::Validation(ValidationError::OutOfRange { .. }) => {
                "Use a smaller daily deposit, interest rate or number of days"
            }
            DepositError::Validation(ValidationError::EmptySerial)
            | DepositError::Validation(ValidationError::InvalidSerialFormat { .. }) => {
                "Copy the 10-character serial printed on the note, e.g. AB12CD34EF"
            }
            DepositError::ParseInputError { .. } => "Use digits only, e.g. 100 or 0.04",
            DepositError::CsvError(_) => {
                "Check the header: name,daily_deposit,interest_rate,maturity_days,serial_number"
            }
            DepositError::IoError(_) => "Check that the path exists and is writable",
            DepositError::SerializationError(_) => "Retry the export with the csv format",
            DepositError::ConfigError { .. } | DepositError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DepositError>;
