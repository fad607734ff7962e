// ============================================================================
// Fixed-Point Decimal
// Mantissa + precision arithmetic with canonical results
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Largest number of decimal places a canonical value may carry.
///
/// Addition and subtraction reject results that need more places;
/// multiplication and percent application round down to this many.
pub const MAX_PRECISION: u32 = 10;

/// Fixed-point decimal number with runtime precision.
///
/// Represents `mantissa × 10^-precision`. Values are immutable: every
/// operation returns a new value.
///
/// Equality is structural (`{10, 1}` and `{1, 0}` are different values of
/// the same number); use [`FixedDecimal::value_eq`] or compare canonical
/// forms to compare numbers.
///
/// # Example
/// ```
/// use fixed_money::numeric::FixedDecimal;
///
/// let a = FixedDecimal::new(123, 1); // 12.3
/// let b = FixedDecimal::new(90, 2);  // 0.90
/// let diff = a.checked_sub(b).unwrap();
/// assert_eq!(diff, FixedDecimal::new(114, 1)); // 11.4
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedDecimal {
    mantissa: i64,
    precision: u32,
}

// ============================================================================
// Scale Helpers
// ============================================================================

/// Compute 10^n as an i64, failing when it does not fit.
#[inline]
fn pow10(n: u32) -> NumericResult<i64> {
    10i64.checked_pow(n).ok_or(NumericError::MantissaOverflow)
}

/// Divide `value` by `10^pwr`, rounding half-up toward positive infinity.
///
/// Computes `floor(value / base + 1/2)` with Euclidean division so the
/// remainder is never negative, e.g. -1234.5 -> -1234 and -1234.6 -> -1235.
pub(crate) fn round_half_up_i128(value: i128, pwr: u32) -> i128 {
    if pwr == 0 {
        return value;
    }
    match 10i128.checked_pow(pwr) {
        Some(base) => {
            let quotient = value.div_euclid(base);
            let rem = value.rem_euclid(base);
            if rem >= base / 2 {
                quotient + 1
            } else {
                quotient
            }
        },
        // 10^39 and above: every i128 input is below half the base
        None => 0,
    }
}

impl FixedDecimal {
    /// Zero value `{0, 0}`
    pub const ZERO: Self = Self::new(0, 0);

    /// One `{1, 0}`
    pub const ONE: Self = Self::new(1, 0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a mantissa and a number of implied decimal places.
    #[inline]
    pub const fn new(mantissa: i64, precision: u32) -> Self {
        Self {
            mantissa,
            precision,
        }
    }

    /// Create a whole number (precision 0).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::new(value, 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn mantissa(self) -> i64 {
        self.mantissa
    }

    #[inline]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.mantissa == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.mantissa > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.mantissa < 0
    }

    /// Check if value is in canonical form.
    pub fn is_canonical(self) -> bool {
        self.clean() == self
    }

    /// Numeric equality regardless of representation.
    pub fn value_eq(self, other: Self) -> bool {
        self.normalize() == other.normalize()
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `MantissaOverflow` for a mantissa of `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.mantissa
            .checked_neg()
            .map(|m| Self::new(m, self.precision))
            .ok_or(NumericError::MantissaOverflow)
    }

    // ========================================================================
    // Precision Handling
    // ========================================================================

    /// Scale up to a higher precision without changing the value.
    ///
    /// Uses an exact integer power of ten; no-op if `precision` is not
    /// higher than the current one.
    ///
    /// # Errors
    /// Returns `MantissaOverflow` if the scaled mantissa does not fit.
    pub fn rescale(self, precision: u32) -> NumericResult<Self> {
        if precision <= self.precision {
            return Ok(self);
        }
        let factor = pow10(precision - self.precision)?;
        self.mantissa
            .checked_mul(factor)
            .map(|m| Self::new(m, precision))
            .ok_or(NumericError::MantissaOverflow)
    }

    /// Strip trailing zeros from the mantissa, lowering the precision.
    ///
    /// Zero becomes `{0, 0}`. Never rounds.
    pub fn normalize(self) -> Self {
        if self.mantissa == 0 {
            return Self::ZERO;
        }
        let mut mantissa = self.mantissa;
        let mut precision = self.precision;
        while precision > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            precision -= 1;
        }
        Self::new(mantissa, precision)
    }

    /// Canonical form: normalized and capped at [`MAX_PRECISION`].
    ///
    /// Values that still need more than `MAX_PRECISION` places after
    /// stripping are rounded half-up to `MAX_PRECISION` and stripped again.
    pub fn clean(self) -> Self {
        let normalized = self.normalize();
        if normalized.precision > MAX_PRECISION {
            normalized.round(MAX_PRECISION).normalize()
        } else {
            normalized
        }
    }

    /// Round half-up to `precision` decimal places.
    ///
    /// Ties go toward positive infinity: 1234.5 -> 1235, -1234.5 -> -1234.
    /// Returns `self` unchanged when `precision` is not lower than the
    /// current precision.
    pub fn round(self, precision: u32) -> Self {
        if precision >= self.precision {
            return self;
        }
        let rounded = round_half_up_i128(self.mantissa as i128, self.precision - precision);
        // |rounded| <= |mantissa| / 10 + 1, always inside i64
        Self::new(rounded as i64, precision)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// - `MantissaOverflow` if alignment or the sum leaves the i64 range
    /// - `PrecisionOverflow` if the canonical result needs more than
    ///   [`MAX_PRECISION`] places
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let (a, b, precision) = make_equatable(self, rhs)?;
        let sum = a
            .mantissa
            .checked_add(b.mantissa)
            .ok_or(NumericError::MantissaOverflow)?;
        Self::new(sum, precision).reject_excess_precision()
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Same as [`FixedDecimal::checked_add`].
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let (a, b, precision) = make_equatable(self, rhs)?;
        let diff = a
            .mantissa
            .checked_sub(b.mantissa)
            .ok_or(NumericError::MantissaOverflow)?;
        Self::new(diff, precision).reject_excess_precision()
    }

    /// Checked multiplication.
    ///
    /// Precisions add; the result is cleaned, so anything past
    /// [`MAX_PRECISION`] places is rounded away rather than rejected.
    ///
    /// # Errors
    /// Returns `MantissaOverflow` if the mantissa product does not fit.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::scaled_product(self, rhs.mantissa, rhs.precision)
    }

    /// How many whole times `rhs` fits into `self`.
    ///
    /// Aligns both operands, then divides the mantissas truncating toward
    /// zero. When the aligned dividend is smaller than the aligned divisor
    /// the count is `0`: `28.3 / 34` is `0`, and so is `-10 / 3`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `MantissaOverflow` if alignment overflows
    pub fn checked_quotient(self, rhs: Self) -> NumericResult<i64> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let (a, b, _) = make_equatable(self, rhs)?;
        if a.mantissa < b.mantissa {
            return Ok(0);
        }
        // a >= b rules out i64::MIN / -1
        a.mantissa
            .checked_div(b.mantissa)
            .ok_or(NumericError::MantissaOverflow)
    }

    /// Multiply by a raw `(mantissa, precision)` factor and clean.
    pub(crate) fn scaled_product(
        self,
        factor_mantissa: i64,
        factor_precision: u32,
    ) -> NumericResult<Self> {
        let mantissa = self
            .mantissa
            .checked_mul(factor_mantissa)
            .ok_or(NumericError::MantissaOverflow)?;
        let precision = self
            .precision
            .checked_add(factor_precision)
            .ok_or(NumericError::PrecisionOverflow)?;
        Ok(Self::new(mantissa, precision).clean())
    }

    fn reject_excess_precision(self) -> NumericResult<Self> {
        let normalized = self.normalize();
        if normalized.precision > MAX_PRECISION {
            Err(NumericError::PrecisionOverflow)
        } else {
            Ok(normalized)
        }
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Align two values to their common (higher) precision.
///
/// Returns both aligned values and the common precision.
///
/// # Errors
/// Returns `MantissaOverflow` if scaling the less precise operand overflows.
pub fn make_equatable(
    a: FixedDecimal,
    b: FixedDecimal,
) -> NumericResult<(FixedDecimal, FixedDecimal, u32)> {
    let precision = a.precision.max(b.precision);
    Ok((a.rescale(precision)?, b.rescale(precision)?, precision))
}

/// See [`FixedDecimal::clean`].
#[inline]
pub fn clean(value: FixedDecimal) -> FixedDecimal {
    value.clean()
}

/// See [`FixedDecimal::normalize`].
#[inline]
pub fn normalize(value: FixedDecimal) -> FixedDecimal {
    value.normalize()
}

/// See [`FixedDecimal::round`].
#[inline]
pub fn round(value: FixedDecimal, precision: u32) -> FixedDecimal {
    value.round(precision)
}

/// See [`FixedDecimal::checked_add`].
#[inline]
pub fn add(a: FixedDecimal, b: FixedDecimal) -> NumericResult<FixedDecimal> {
    a.checked_add(b)
}

/// See [`FixedDecimal::checked_sub`].
#[inline]
pub fn subtract(a: FixedDecimal, b: FixedDecimal) -> NumericResult<FixedDecimal> {
    a.checked_sub(b)
}

/// See [`FixedDecimal::checked_mul`].
#[inline]
pub fn multiply(a: FixedDecimal, b: FixedDecimal) -> NumericResult<FixedDecimal> {
    a.checked_mul(b)
}

/// See [`FixedDecimal::checked_quotient`].
#[inline]
pub fn divide_quotient(a: FixedDecimal, b: FixedDecimal) -> NumericResult<i64> {
    a.checked_quotient(b)
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedDecimal({}, mantissa={}, precision={})",
            self, self.mantissa, self.precision
        )
    }
}

/// Widest precision rendered in positional notation (rust_decimal's max scale).
const POSITIONAL_DISPLAY_PLACES: u32 = 28;

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let places = self.precision as usize;

        if places == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        if self.precision > POSITIONAL_DISPLAY_PLACES {
            return write!(f, "{}{}e-{}", sign, digits, self.precision);
        }

        // Left-pad so there is at least one integer digit
        let padded = format!("{:0>width$}", digits, width = places + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - places);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedDecimal {
    /// Convert from rust_decimal::Decimal.
    ///
    /// The result is cleaned: trailing zeros are dropped and anything past
    /// [`MAX_PRECISION`] places is rounded half-up.
    ///
    /// # Errors
    /// Returns `MantissaOverflow` if the mantissa does not fit an i64.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let d = d.normalize();
        let scale = d.scale();
        let (mantissa, precision) = if scale > MAX_PRECISION {
            (
                round_half_up_i128(d.mantissa(), scale - MAX_PRECISION),
                MAX_PRECISION,
            )
        } else {
            (d.mantissa(), scale)
        };
        let mantissa = i64::try_from(mantissa).map_err(|_| NumericError::MantissaOverflow)?;
        Ok(Self::new(mantissa, precision).clean())
    }

    /// Convert to rust_decimal::Decimal, keeping the precision as scale.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the precision exceeds rust_decimal's
    /// maximum scale.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_new(self.mantissa, self.precision)
            .map_err(|_| NumericError::InvalidInput)
    }

    /// Nearest f64, for display and interop only.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the value cannot be converted.
    pub fn to_f64(self) -> NumericResult<f64> {
        use rust_decimal::prelude::ToPrimitive;

        self.to_decimal()?.to_f64().ok_or(NumericError::InvalidInput)
    }
}

// ============================================================================
// Serde (decimal string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for FixedDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FixedDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Decode a JSON decimal string through rust_decimal.
#[cfg(feature = "serde")]
pub(crate) fn parse_decimal_str(s: &str) -> NumericResult<FixedDecimal> {
    let d = rust_decimal::Decimal::from_str_exact(s.trim())
        .map_err(|_| NumericError::InvalidInput)?;
    FixedDecimal::from_decimal(d)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fd(mantissa: i64, precision: u32) -> FixedDecimal {
        FixedDecimal::new(mantissa, precision)
    }

    #[test]
    fn test_constants() {
        assert_eq!(FixedDecimal::ZERO, fd(0, 0));
        assert_eq!(FixedDecimal::ONE, fd(1, 0));
        assert_eq!(FixedDecimal::default(), FixedDecimal::ZERO);
        assert_eq!(MAX_PRECISION, 10);
    }

    #[test]
    fn test_make_equatable() {
        let (a, b, precision) = make_equatable(fd(1234, 4), fd(1234, 2)).unwrap();
        assert_eq!(precision, 4);
        assert_eq!(a, fd(1234, 4));
        assert_eq!(b, fd(123_400, 4));

        let (a, b, precision) = make_equatable(fd(5, 1), fd(7, 1)).unwrap();
        assert_eq!(precision, 1);
        assert_eq!((a, b), (fd(5, 1), fd(7, 1)));
    }

    #[test]
    fn test_make_equatable_overflow() {
        let result = make_equatable(fd(i64::MAX, 0), fd(1, 1));
        assert_eq!(result, Err(NumericError::MantissaOverflow));

        // Scale factor itself does not fit
        let result = make_equatable(fd(1, 0), fd(1, 25));
        assert_eq!(result, Err(NumericError::MantissaOverflow));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(fd(12_300, 3).normalize(), fd(123, 1));
        assert_eq!(fd(1000, 2).normalize(), fd(10, 0));
        assert_eq!(fd(0, 7).normalize(), fd(0, 0));
        assert_eq!(fd(1000, 0).normalize(), fd(1000, 0));
        assert_eq!(fd(-500, 2).normalize(), fd(-5, 0));
    }

    #[test]
    fn test_clean_caps_precision() {
        // 0.000000000012345 (15 places) -> 0.0000000000 rounds to zero
        assert_eq!(fd(12_345, 15).clean(), fd(0, 0));
        // 0.123456789015 -> 0.123456789 after rounding and stripping
        assert_eq!(fd(123_456_789_015, 12).clean(), fd(1_234_567_890, 10).normalize());
        // 1.09999999999 -> 1.1000000000 -> 1.1
        assert_eq!(fd(109_999_999_999, 11).clean(), fd(11, 1));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(fd(1234, 4), 3), fd(123, 3));
        assert_eq!(round(fd(12_345, 1), 0), fd(1235, 0));
        assert_eq!(round(fd(123_499, 2), 0), fd(1235, 0));
        assert_eq!(round(fd(12_355, 1), 0), fd(1236, 0));
    }

    #[test]
    fn test_round_negative() {
        // Ties go toward positive infinity
        assert_eq!(round(fd(-12_345, 1), 0), fd(-1234, 0));
        assert_eq!(round(fd(-12_346, 1), 0), fd(-1235, 0));
        assert_eq!(round(fd(-12_344, 1), 0), fd(-1234, 0));
        assert_eq!(round(fd(-5, 1), 0), fd(0, 0));
    }

    #[test]
    fn test_round_noop() {
        assert_eq!(round(fd(1234, 2), 2), fd(1234, 2));
        assert_eq!(round(fd(1234, 2), 5), fd(1234, 2));
    }

    #[test]
    fn test_round_huge_power() {
        assert_eq!(round(fd(i64::MAX, 40), 0), fd(0, 0));
        assert_eq!(round(fd(i64::MAX, 19), 0), fd(1, 0));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(add(fd(1234, 0), fd(567, 0)).unwrap(), fd(1801, 0));
        assert_eq!(add(fd(901, 0), fd(5843, 4)).unwrap(), fd(9_015_843, 4));
        // 0.25 + 0.75 = 1
        assert_eq!(add(fd(25, 2), fd(75, 2)).unwrap(), fd(1, 0));
    }

    #[test]
    fn test_checked_add_precision_overflow() {
        let tiny = fd(1, 11);
        assert_eq!(add(tiny, fd(1, 0)), Err(NumericError::PrecisionOverflow));
        // Excess places cancel out
        assert_eq!(add(tiny, fd(-1, 11)).unwrap(), FixedDecimal::ZERO);
    }

    #[test]
    fn test_checked_add_mantissa_overflow() {
        assert_eq!(
            add(fd(i64::MAX, 0), fd(1, 0)),
            Err(NumericError::MantissaOverflow)
        );
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(subtract(fd(123, 1), fd(90, 2)).unwrap(), fd(114, 1));
        assert_eq!(subtract(fd(123, 1), fd(3, 1)).unwrap(), fd(12, 0));
        assert_eq!(subtract(fd(5, 0), fd(75, 1)).unwrap(), fd(-25, 1));
        assert_eq!(
            subtract(fd(i64::MIN, 0), fd(1, 0)),
            Err(NumericError::MantissaOverflow)
        );
        assert_eq!(
            subtract(fd(1, 0), fd(1, 12)),
            Err(NumericError::PrecisionOverflow)
        );
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(multiply(fd(1234, 0), fd(890, 0)).unwrap(), fd(1_098_260, 0));
        assert_eq!(multiply(fd(1234, 6), fd(890, 6)).unwrap(), fd(10_983, 10));
        // 2.5 * 0.4 = 1
        assert_eq!(multiply(fd(25, 1), fd(4, 1)).unwrap(), fd(1, 0));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let result = multiply(fd(i64::MAX, 0), fd(2, 0));
        assert_eq!(result, Err(NumericError::MantissaOverflow));
        assert_eq!(result.unwrap_or_default(), FixedDecimal::ZERO);

        let large = fd(10_000_000_000, 2);
        assert_eq!(multiply(large, large), Err(NumericError::MantissaOverflow));
    }

    #[test]
    fn test_checked_quotient() {
        assert_eq!(divide_quotient(fd(1000, 0), fd(10, 0)).unwrap(), 100);
        assert_eq!(divide_quotient(fd(283, 1), fd(34, 0)).unwrap(), 0);
        // 485.24 / 10.4563 = 46.4...
        assert_eq!(divide_quotient(fd(48_524, 2), fd(104_563, 4)).unwrap(), 46);
    }

    #[test]
    fn test_checked_quotient_signs() {
        // Dividend below divisor counts zero whole fits
        assert_eq!(divide_quotient(fd(-10, 0), fd(3, 0)).unwrap(), 0);
        assert_eq!(divide_quotient(fd(-10, 0), fd(-3, 0)).unwrap(), 0);
        assert_eq!(divide_quotient(fd(-25, 1), fd(1, 0)).unwrap(), 0);
        // Dividend at or above divisor truncates toward zero
        assert_eq!(divide_quotient(fd(10, 0), fd(-3, 0)).unwrap(), -3);
        assert_eq!(divide_quotient(fd(-3, 0), fd(-10, 0)).unwrap(), 0);
        assert_eq!(divide_quotient(fd(30, 0), fd(-100, 1)).unwrap(), -3);
        assert_eq!(divide_quotient(fd(-30, 0), fd(-100, 1)).unwrap(), 0);
        assert_eq!(divide_quotient(fd(i64::MIN, 0), fd(-1, 0)).unwrap(), 0);
    }

    #[test]
    fn test_checked_quotient_errors() {
        assert_eq!(
            divide_quotient(fd(1, 0), fd(0, 3)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            divide_quotient(fd(1, 0), fd(1, 25)),
            Err(NumericError::MantissaOverflow)
        );
    }

    #[test]
    fn test_value_eq() {
        assert!(fd(10, 1).value_eq(fd(1, 0)));
        assert!(fd(0, 4).value_eq(FixedDecimal::ZERO));
        assert!(!fd(10, 1).value_eq(fd(10, 0)));
        assert_ne!(fd(10, 1), fd(1, 0));
    }

    #[test]
    fn test_sign_checks() {
        assert!(fd(5, 1).is_positive());
        assert!(!fd(5, 1).is_negative());
        assert!(fd(-5, 1).is_negative());
        assert!(!fd(0, 3).is_positive());
        assert!(!fd(0, 3).is_negative());
    }

    #[test]
    fn test_is_canonical() {
        assert!(fd(123, 1).is_canonical());
        assert!(FixedDecimal::ZERO.is_canonical());
        assert!(!fd(0, 2).is_canonical());
        assert!(!fd(1230, 2).is_canonical());
        assert!(!fd(1, 11).is_canonical());
        assert!(fd(1, 11).clean().is_canonical());
    }

    #[test]
    fn test_checked_neg() {
        assert_eq!(fd(5, 1).checked_neg().unwrap(), fd(-5, 1));
        assert_eq!(
            fd(i64::MIN, 0).checked_neg(),
            Err(NumericError::MantissaOverflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(fd(1234, 2).to_string(), "12.34");
        assert_eq!(fd(5, 2).to_string(), "0.05");
        assert_eq!(fd(-5, 2).to_string(), "-0.05");
        assert_eq!(fd(1801, 0).to_string(), "1801");
        assert_eq!(fd(0, 0).to_string(), "0");
        assert_eq!(fd(i64::MIN, 0).to_string(), "-9223372036854775808");
        assert_eq!(fd(1, 28).to_string(), format!("0.{}1", "0".repeat(27)));
    }

    #[test]
    fn test_display_extreme_precision() {
        assert_eq!(fd(1, 29).to_string(), "1e-29");
        assert_eq!(fd(-42, u32::MAX).to_string(), "-42e-4294967295");
        assert_eq!(
            format!("{:?}", fd(7, u32::MAX)),
            "FixedDecimal(7e-4294967295, mantissa=7, precision=4294967295)"
        );
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let x = FixedDecimal::from_decimal(Decimal::new(12_345, 2)).unwrap();
        assert_eq!(x, fd(12_345, 2));

        // Trailing zeros dropped
        let y = FixedDecimal::from_decimal(Decimal::new(5_282_900, 4)).unwrap();
        assert_eq!(y, fd(52_829, 1));

        // Scale past the cap rounds
        let z = FixedDecimal::from_decimal(Decimal::new(123_456_789_015, 12)).unwrap();
        assert_eq!(z, fd(123_456_789_015, 12).clean());

        let big = Decimal::from_i128_with_scale(i64::MAX as i128 + 1, 0);
        assert_eq!(
            FixedDecimal::from_decimal(big),
            Err(NumericError::MantissaOverflow)
        );
    }

    #[test]
    fn test_to_decimal() {
        let d = fd(123_456, 3).to_decimal().unwrap();
        assert_eq!(d.to_string(), "123.456");
        assert_eq!(fd(1, 29).to_decimal(), Err(NumericError::InvalidInput));
        assert!((fd(5732, 1).to_f64().unwrap() - 573.2).abs() < 1e-9);
    }
}
