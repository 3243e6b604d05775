use crate::core::ledger;
use crate::domain::model::{DepositRequest, NormalizedInput, SerialNumber};
use crate::utils::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

fn serial_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z0-9]{10}$").expect("serial pattern is a valid regex"))
}

/// Checks raw submission fields and normalizes the serial.
///
/// Numeric fields are checked first, including that every ledger figure stays
/// finite, then the serial is trimmed and upper-cased before the emptiness and
/// shape checks. Pure: nothing outside the returned value is touched.
pub fn validate(
    daily_deposit: f64,
    interest_rate: f64,
    maturity_days: i64,
    serial_number: &str,
) -> Result<NormalizedInput, ValidationError> {
    check_amount("daily deposit", daily_deposit)?;
    check_amount("interest rate", interest_rate)?;
    let maturity_days = u64::try_from(maturity_days).map_err(|_| ValidationError::NegativeInput {
        field: "maturity days",
    })?;

    if !ledger::compute(daily_deposit, interest_rate, maturity_days).is_finite() {
        return Err(ValidationError::OutOfRange {
            field: "ledger report",
        });
    }

    let serial_number = normalize_serial(serial_number)?;

    tracing::debug!(
        serial = %serial_number,
        daily_deposit,
        interest_rate,
        maturity_days,
        "submission validated"
    );

    Ok(NormalizedInput {
        daily_deposit,
        interest_rate,
        maturity_days,
        serial_number,
    })
}

pub fn validate_request(request: &DepositRequest) -> Result<NormalizedInput, ValidationError> {
    validate(
        request.daily_deposit,
        request.interest_rate,
        request.maturity_days,
        &request.serial_number,
    )
}

/// Trims, upper-cases and shape-checks a serial.
pub fn normalize_serial(raw: &str) -> Result<SerialNumber, ValidationError> {
    let normalized = raw.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(ValidationError::EmptySerial);
    }
    if !serial_pattern().is_match(&normalized) {
        return Err(ValidationError::InvalidSerialFormat { serial: normalized });
    }
    Ok(SerialNumber::new_unchecked(normalized))
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // -inf falls through to the sign check below.
    if value.is_nan() || value == f64::INFINITY {
        return Err(ValidationError::NonFiniteInput { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeInput { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_serial_passes() {
        let input = validate(100.0, 0.04, 365, "AB12CD34EF").unwrap();
        assert_eq!(input.serial_number.as_str(), "AB12CD34EF");
        assert_eq!(input.maturity_days, 365);
    }

    #[test]
    fn test_short_serial_is_invalid_format() {
        let err = validate(100.0, 0.04, 365, "AB12CD34").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSerialFormat {
                serial: "AB12CD34".to_string()
            }
        );
    }

    #[test]
    fn test_empty_and_blank_serials() {
        assert_eq!(validate(1.0, 0.0, 1, "").unwrap_err(), ValidationError::EmptySerial);
        assert_eq!(validate(1.0, 0.0, 1, "   \t").unwrap_err(), ValidationError::EmptySerial);
    }

    #[test]
    fn test_lowercase_serial_normalizes() {
        let lower = validate(10.0, 0.1, 30, "  ab12cd34ef ").unwrap();
        let upper = validate(10.0, 0.1, 30, "AB12CD34EF").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_serial_with_symbols_is_rejected() {
        assert!(matches!(
            normalize_serial("AB12-CD34E"),
            Err(ValidationError::InvalidSerialFormat { .. })
        ));
        assert!(matches!(
            normalize_serial("AB12CD34EFG"),
            Err(ValidationError::InvalidSerialFormat { .. })
        ));
    }

    #[test]
    fn test_negative_fields_are_rejected() {
        assert_eq!(
            validate(-1.0, 0.04, 365, "AB12CD34EF").unwrap_err(),
            ValidationError::NegativeInput { field: "daily deposit" }
        );
        assert_eq!(
            validate(1.0, -0.01, 365, "AB12CD34EF").unwrap_err(),
            ValidationError::NegativeInput { field: "interest rate" }
        );
        assert_eq!(
            validate(1.0, 0.04, -3, "AB12CD34EF").unwrap_err(),
            ValidationError::NegativeInput { field: "maturity days" }
        );
    }

    #[test]
    fn test_negative_check_runs_before_serial_checks() {
        assert!(matches!(
            validate(-5.0, 0.0, 0, ""),
            Err(ValidationError::NegativeInput { .. })
        ));
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        assert_eq!(
            validate(f64::NAN, 0.0, 1, "AB12CD34EF").unwrap_err(),
            ValidationError::NonFiniteInput { field: "daily deposit" }
        );
        assert_eq!(
            validate(1.0, f64::INFINITY, 1, "AB12CD34EF").unwrap_err(),
            ValidationError::NonFiniteInput { field: "interest rate" }
        );
        assert_eq!(
            validate(f64::NEG_INFINITY, 0.0, 1, "AB12CD34EF").unwrap_err(),
            ValidationError::NegativeInput { field: "daily deposit" }
        );
    }

    #[test]
    fn test_overflowing_amounts_are_rejected() {
        assert_eq!(
            validate(f64::MAX, 0.0, 2, "AB12CD34EF").unwrap_err(),
            ValidationError::OutOfRange {
                field: "ledger report"
            }
        );
        assert!(matches!(
            validate(1e300, f64::MAX, 10, "AB12CD34EF"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate(1e12, 0.5, 36_500, "AB12CD34EF").is_ok());
    }

    #[test]
    fn test_zero_inputs_are_valid() {
        assert!(validate(0.0, 0.0, 0, "Z9Z9Z9Z9Z9").is_ok());
    }
}
