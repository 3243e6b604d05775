use crate::domain::model::DepositRequest;
use crate::utils::error::{DepositError, Result};
use std::str::FromStr;

/// The five form fields as typed, before any number parsing.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub name: String,
    pub daily_deposit: String,
    pub interest_rate: String,
    pub maturity_days: String,
    pub serial_number: String,
}

impl RawSubmission {
    /// Parses the numeric fields. Sign and serial checks belong to the validator.
    pub fn into_request(self) -> Result<DepositRequest> {
        Ok(DepositRequest {
            customer_name: self.name.trim().to_string(),
            daily_deposit: parse_field("daily deposit", &self.daily_deposit)?,
            interest_rate: parse_field("interest rate", &self.interest_rate)?,
            maturity_days: parse_field("maturity days", &self.maturity_days)?,
            serial_number: self.serial_number,
        })
    }
}

fn parse_field<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    // an empty number box reads as zero, like an untouched form input
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    value.parse().map_err(|_| DepositError::ParseInputError {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "exit" | ":q")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(deposit: &str, rate: &str, days: &str) -> RawSubmission {
        RawSubmission {
            name: " Asha ".to_string(),
            daily_deposit: deposit.to_string(),
            interest_rate: rate.to_string(),
            maturity_days: days.to_string(),
            serial_number: "z9z9z9z9z9".to_string(),
        }
    }

    #[test]
    fn test_parses_numbers_and_trims_name() {
        let request = raw("100", "0.04", "365").into_request().unwrap();
        assert_eq!(request.customer_name, "Asha");
        assert_eq!(request.daily_deposit, 100.0);
        assert_eq!(request.interest_rate, 0.04);
        assert_eq!(request.maturity_days, 365);
        // serial normalization is left to the validator
        assert_eq!(request.serial_number, "z9z9z9z9z9");
    }

    #[test]
    fn test_negative_numbers_parse_for_the_validator_to_reject() {
        let request = raw("-1", "0", "-5").into_request().unwrap();
        assert_eq!(request.daily_deposit, -1.0);
        assert_eq!(request.maturity_days, -5);
    }

    #[test]
    fn test_blank_numbers_read_as_zero() {
        let request = raw("", " ", "").into_request().unwrap();
        assert_eq!(request.daily_deposit, 0.0);
        assert_eq!(request.maturity_days, 0);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = raw("lots", "0.04", "365").into_request().unwrap_err();
        assert!(matches!(err, DepositError::ParseInputError { ref field, .. } if field == "daily deposit"));

        let err = raw("10", "0.04", "1.5").into_request().unwrap_err();
        assert!(matches!(err, DepositError::ParseInputError { ref field, .. } if field == "maturity days"));
    }

    #[test]
    fn test_quit_commands() {
        assert!(is_quit_command("quit"));
        assert!(is_quit_command("  EXIT "));
        assert!(!is_quit_command("Asha"));
    }
}
