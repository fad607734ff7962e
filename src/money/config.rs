// ============================================================================
// Money Configuration
// Defaults applied when money is created or decoded without full tags
// ============================================================================

use super::currency::{Currency, Unit};
use super::tagged::Money;
use crate::numeric::FixedDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Decode Policy
// ============================================================================

/// How JSON money with bad or missing fields is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodePolicy {
    /// Any malformed field is an error
    Strict,
    /// Bad value or currency -> zero money in the default currency;
    /// bad or missing unit -> the currency's default unit
    #[default]
    Lenient,
}

// ============================================================================
// Complete Money Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyConfig {
    /// Currency used for zero fallbacks and `money()`
    pub default_currency: Currency,

    /// Optional: unit for the default currency
    /// None means the currency's own default unit
    pub default_unit: Option<Unit>,

    /// JSON decoding behaviour
    pub decode_policy: DecodePolicy,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self::new(Currency::Eur)
    }
}

impl MoneyConfig {
    pub fn new(default_currency: Currency) -> Self {
        Self {
            default_currency,
            default_unit: None,
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Builder method: Set the unit for the default currency
    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = Some(unit);
        self
    }

    /// Builder method: Set the JSON decode policy
    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(unit) = self.default_unit {
            if !unit.is_valid_for(self.default_currency) {
                return Err(format!(
                    "Default unit {} is not valid for {}",
                    unit, self.default_currency
                ));
            }
        }
        Ok(())
    }

    /// Unit to use for `currency` when none (or an invalid one) is given.
    pub fn unit_for(&self, currency: Currency) -> Unit {
        match self.default_unit {
            Some(unit) if currency == self.default_currency && unit.is_valid_for(currency) => unit,
            _ => currency.default_unit(),
        }
    }

    /// Money in the default currency and unit.
    pub fn money(&self, amount: FixedDecimal) -> Money {
        Money::tagged(
            amount,
            self.default_currency,
            self.unit_for(self.default_currency),
        )
    }

    pub fn zero(&self) -> Money {
        self.money(FixedDecimal::ZERO)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Euro amounts, lenient decoding
    pub fn eurozone() -> Self {
        Self::new(Currency::Eur)
    }

    /// US dollar amounts, lenient decoding
    pub fn united_states() -> Self {
        Self::new(Currency::Usd)
    }

    /// Reject anything malformed
    pub fn strict(default_currency: Currency) -> Self {
        Self::new(default_currency).with_decode_policy(DecodePolicy::Strict)
    }
}
