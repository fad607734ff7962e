// ============================================================================
// Percent
// Fractional multiplier applied to fixed-point amounts
// ============================================================================

use super::errors::NumericResult;
use super::fixed_decimal::FixedDecimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fraction stored as `mantissa × 10^-precision`.
///
/// Precision 2 is the usual choice: `Percent::new(5, 2)` is 0.05, i.e. 5%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percent {
    mantissa: i64,
    precision: u32,
}

impl Percent {
    #[inline]
    pub const fn new(mantissa: i64, precision: u32) -> Self {
        Self {
            mantissa,
            precision,
        }
    }

    /// Whole percentage points, e.g. `from_points(15)` is 15%.
    #[inline]
    pub const fn from_points(points: i64) -> Self {
        Self::new(points, 2)
    }

    #[inline]
    pub const fn mantissa(self) -> i64 {
        self.mantissa
    }

    #[inline]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    /// The fraction as a plain decimal (5% -> 0.05).
    #[inline]
    pub const fn as_fraction(self) -> FixedDecimal {
        FixedDecimal::new(self.mantissa, self.precision)
    }

    /// Percentage points (0.05 -> 5), normalized.
    ///
    /// `None` if shifting a low-precision mantissa overflows.
    fn as_points(self) -> Option<FixedDecimal> {
        match self.precision {
            0 => self.mantissa.checked_mul(100).map(FixedDecimal::from_integer),
            1 => self.mantissa.checked_mul(10).map(FixedDecimal::from_integer),
            p => Some(FixedDecimal::new(self.mantissa, p - 2).normalize()),
        }
    }
}

impl From<Percent> for FixedDecimal {
    fn from(p: Percent) -> Self {
        p.as_fraction()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_points() {
            Some(points) => write!(f, "{}%", points),
            None => write!(f, "{}", self.as_fraction()),
        }
    }
}

/// Apply a percentage to an amount.
///
/// Behaves like multiplication: precisions add and anything past
/// `MAX_PRECISION` places is rounded away.
///
/// # Errors
/// Returns `MantissaOverflow` if the mantissa product does not fit.
#[inline]
pub fn apply_percent(amount: FixedDecimal, percent: Percent) -> NumericResult<FixedDecimal> {
    amount.apply_percent(percent)
}

impl FixedDecimal {
    /// See [`apply_percent`].
    pub fn apply_percent(self, percent: Percent) -> NumericResult<Self> {
        self.scaled_product(percent.mantissa, percent.precision)
    }
}
