// ============================================================================
// Currency and Unit
// Tags carried by a Money value
// ============================================================================

use super::errors::MoneyError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ISO 4217 currency of a money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// Euro
    Eur,
    /// United States dollar
    Usd,
}

impl Currency {
    /// ISO 4217 code, e.g. "EUR".
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    /// The unit amounts are expressed in when none is given.
    pub const fn default_unit(self) -> Unit {
        match self {
            Currency::Eur => Unit::Euro,
            Currency::Usd => Unit::Dollar,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Case-insensitive ISO code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            _ => Err(MoneyError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Denomination a money amount is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Euro,
    /// Hundredth of the main unit; valid for every currency
    Cent,
    Dollar,
}

impl Unit {
    /// Upper-case unit name, e.g. "CENT".
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Euro => "EURO",
            Unit::Cent => "CENT",
            Unit::Dollar => "DOLLAR",
        }
    }

    pub const fn is_valid_for(self, currency: Currency) -> bool {
        matches!(
            (self, currency),
            (Unit::Cent, _) | (Unit::Euro, Currency::Eur) | (Unit::Dollar, Currency::Usd)
        )
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = MoneyError;

    /// Case-insensitive unit name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EURO" => Ok(Unit::Euro),
            "CENT" => Ok(Unit::Cent),
            "DOLLAR" => Ok(Unit::Dollar),
            _ => Err(MoneyError::UnknownUnit(s.to_string())),
        }
    }
}
