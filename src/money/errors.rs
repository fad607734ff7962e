// ============================================================================
// Money Errors
// ============================================================================

use super::currency::{Currency, Unit};
use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by currency-tagged money operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Operands carry different currencies
    CurrencyMismatch { left: Currency, right: Currency },
    /// Operands carry different units of the same currency
    UnitMismatch { left: Unit, right: Unit },
    /// Unit does not denominate the currency (e.g. dollars of EUR)
    UnitNotValidFor { unit: Unit, currency: Currency },
    /// Currency code not recognised
    UnknownCurrency(String),
    /// Unit name not recognised
    UnknownUnit(String),
    /// JSON input could not be decoded
    Decode(String),
    /// Money could not be encoded as JSON
    Encode(String),
    /// Underlying fixed-point operation failed
    Numeric(NumericError),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch { left, right } => {
                write!(f, "currency mismatch: {} vs {}", left, right)
            },
            MoneyError::UnitMismatch { left, right } => {
                write!(f, "unit mismatch: {} vs {}", left, right)
            },
            MoneyError::UnitNotValidFor { unit, currency } => {
                write!(f, "unit {} is not valid for {}", unit, currency)
            },
            MoneyError::UnknownCurrency(code) => write!(f, "unknown currency: {:?}", code),
            MoneyError::UnknownUnit(name) => write!(f, "unknown unit: {:?}", name),
            MoneyError::Decode(msg) => write!(f, "decode error: {}", msg),
            MoneyError::Encode(msg) => write!(f, "encode error: {}", msg),
            MoneyError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MoneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoneyError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for MoneyError {
    fn from(err: NumericError) -> Self {
        MoneyError::Numeric(err)
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = MoneyError::CurrencyMismatch {
            left: Currency::Usd,
            right: Currency::Eur,
        };
        assert_eq!(err.to_string(), "currency mismatch: USD vs EUR");
        assert_eq!(
            MoneyError::UnknownCurrency("NZD".into()).to_string(),
            "unknown currency: \"NZD\""
        );
    }

    #[test]
    fn test_decode_and_encode_are_distinct() {
        assert_eq!(
            MoneyError::Decode("missing value".into()).to_string(),
            "decode error: missing value"
        );
        assert_eq!(
            MoneyError::Encode("io failure".into()).to_string(),
            "encode error: io failure"
        );
        assert_ne!(
            MoneyError::Decode("x".into()),
            MoneyError::Encode("x".into())
        );
    }

    #[test]
    fn test_numeric_source() {
        let err = MoneyError::from(NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
        assert!(err.source().is_some());
    }
}
