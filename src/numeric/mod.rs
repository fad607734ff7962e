// ============================================================================
// Numeric Module
// Fixed-point decimal arithmetic for monetary values
// ============================================================================
//
// This module provides:
// - FixedDecimal: mantissa + runtime precision (`mantissa / 10^precision`)
// - Percent: fraction with the same shape, applied to a FixedDecimal
// - NumericError: Error types for arithmetic operations
// - Free-function forms of every operation
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Results are canonical: no removable trailing zeros
// - Precision is capped at MAX_PRECISION

mod errors;
mod fixed_decimal;
mod percent;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{
    add, clean, divide_quotient, make_equatable, multiply, normalize, round, subtract,
    FixedDecimal, MAX_PRECISION,
};
pub use percent::{apply_percent, Percent};

#[cfg(feature = "serde")]
pub(crate) use fixed_decimal::parse_decimal_str;
