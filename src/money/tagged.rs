// ============================================================================
// Money
// Fixed-point amount tagged with a currency and a unit
// ============================================================================

use super::currency::{Currency, Unit};
use super::errors::{MoneyError, MoneyResult};
use crate::numeric::{FixedDecimal, Percent};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An amount of money in a specific currency and unit.
///
/// Arithmetic only combines values with the same currency and unit; the
/// amount follows the [`FixedDecimal`] rules.
///
/// Serializes (with the `serde` feature) as
/// `{"currency":"EUR","unit":"euro","value":"529235.4859"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "super::json::RawMoney"))]
pub struct Money {
    currency: Currency,
    unit: Unit,
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    amount: FixedDecimal,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a money value; the amount is cleaned.
    ///
    /// # Errors
    /// Returns `UnitNotValidFor` if `unit` does not denominate `currency`.
    pub fn new(amount: FixedDecimal, currency: Currency, unit: Unit) -> MoneyResult<Self> {
        if !unit.is_valid_for(currency) {
            return Err(MoneyError::UnitNotValidFor { unit, currency });
        }
        Ok(Self::tagged(amount, currency, unit))
    }

    /// Create from textual currency and unit labels, e.g. `("EUR", "cent")`.
    pub fn parse_labels(
        mantissa: i64,
        precision: u32,
        currency: &str,
        unit: &str,
    ) -> MoneyResult<Self> {
        Self::new(
            FixedDecimal::new(mantissa, precision),
            currency.parse()?,
            unit.parse()?,
        )
    }

    /// Create in the currency's default unit.
    pub fn new_default(amount: FixedDecimal, currency: Currency) -> Self {
        Self::tagged(amount, currency, currency.default_unit())
    }

    pub fn euro(mantissa: i64, precision: u32) -> Self {
        Self::new_default(FixedDecimal::new(mantissa, precision), Currency::Eur)
    }

    pub fn euro_cent(mantissa: i64, precision: u32) -> Self {
        Self::tagged(FixedDecimal::new(mantissa, precision), Currency::Eur, Unit::Cent)
    }

    pub fn us_dollar(mantissa: i64, precision: u32) -> Self {
        Self::new_default(FixedDecimal::new(mantissa, precision), Currency::Usd)
    }

    pub fn zero_euro() -> Self {
        Self::new_default(FixedDecimal::ZERO, Currency::Eur)
    }

    pub fn zero_us_dollar() -> Self {
        Self::new_default(FixedDecimal::ZERO, Currency::Usd)
    }

    /// Create from a rust_decimal amount, e.g. one read from a database.
    pub fn from_decimal(
        amount: rust_decimal::Decimal,
        currency: Currency,
        unit: Unit,
    ) -> MoneyResult<Self> {
        Self::new(FixedDecimal::from_decimal(amount)?, currency, unit)
    }

    /// Only called with a unit already checked against the currency.
    pub(crate) fn tagged(amount: FixedDecimal, currency: Currency, unit: Unit) -> Self {
        Self {
            currency,
            unit,
            amount: amount.clean(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> FixedDecimal {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Same numeric amount, currency and unit.
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.equal_currency(other) && self.equal_unit(other) && self.amount.value_eq(other.amount)
    }

    #[inline]
    pub fn equal_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    #[inline]
    pub fn equal_unit(&self, other: &Self) -> bool {
        self.unit == other.unit
    }

    fn ensure_compatible(&self, other: &Self) -> MoneyResult<()> {
        if !self.equal_currency(other) {
            tracing::debug!(
                left = %self.currency,
                right = %other.currency,
                "rejecting money operation across currencies"
            );
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        if !self.equal_unit(other) {
            tracing::debug!(
                left = %self.unit,
                right = %other.unit,
                "rejecting money operation across units"
            );
            return Err(MoneyError::UnitMismatch {
                left: self.unit,
                right: other.unit,
            });
        }
        Ok(())
    }

    fn with_amount(&self, amount: FixedDecimal) -> Self {
        Self::tagged(amount, self.currency, self.unit)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_compatible(other)?;
        Ok(self.with_amount(self.amount.checked_add(other.amount)?))
    }

    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_compatible(other)?;
        Ok(self.with_amount(self.amount.checked_sub(other.amount)?))
    }

    /// Multiply two amounts of the same currency and unit.
    pub fn checked_mul(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_compatible(other)?;
        Ok(self.with_amount(self.amount.checked_mul(other.amount)?))
    }

    /// How many whole times `other` fits into `self`.
    pub fn checked_quotient(&self, other: &Self) -> MoneyResult<i64> {
        self.ensure_compatible(other)?;
        Ok(self.amount.checked_quotient(other.amount)?)
    }

    /// Multiply by an untagged factor.
    pub fn multiply_by(&self, factor: FixedDecimal) -> MoneyResult<Self> {
        Ok(self.with_amount(self.amount.checked_mul(factor)?))
    }

    /// How many whole times an untagged amount fits into `self`.
    pub fn quotient_by(&self, divisor: FixedDecimal) -> MoneyResult<i64> {
        Ok(self.amount.checked_quotient(divisor)?)
    }

    pub fn apply_percent(&self, percent: Percent) -> MoneyResult<Self> {
        Ok(self.with_amount(self.amount.apply_percent(percent)?))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    pub fn to_decimal(&self) -> MoneyResult<rust_decimal::Decimal> {
        Ok(self.amount.to_decimal()?)
    }

    pub fn to_f64(&self) -> MoneyResult<f64> {
        Ok(self.amount.to_f64()?)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == self.currency.default_unit() {
            write!(f, "{} {}", self.amount, self.currency)
        } else {
            write!(f, "{} {} {}", self.amount, self.currency, self.unit)
        }
    }
}
