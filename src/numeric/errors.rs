// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Add/subtract result needs more than `MAX_PRECISION` decimal places
    PrecisionOverflow,
    /// A mantissa product, sum or scaling step exceeded the i64 range
    MantissaOverflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Boundary value could not be converted
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::PrecisionOverflow => write!(
                f,
                "precision overflow: result exceeds the maximum number of decimal places"
            ),
            NumericError::MantissaOverflow => {
                write!(f, "mantissa overflow: result exceeded 64-bit range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not convert value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
