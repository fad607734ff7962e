// ============================================================================
// Fixed Money Library
// Fixed-point decimal arithmetic for monetary values
// ============================================================================

//! # Fixed Money
//!
//! Exact fixed-point arithmetic for money: an `i64` mantissa paired with a
//! decimal-place count.
//!
//! ## Features
//!
//! - **Automatic precision alignment** between differently-scaled operands
//! - **Canonical results** with trailing zeros stripped
//! - **Overflow detection** on every mantissa operation
//! - **Round half-up** to a maximum of ten decimal places
//! - **Currency-tagged money** that refuses to mix currencies or units
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! // 34.5 * 15% = 5.175
//! let price = FixedDecimal::new(345, 1);
//! let tip = price.apply_percent(Percent::new(15, 2)).unwrap();
//! assert_eq!(tip, FixedDecimal::new(5175, 3));
//!
//! // Currency-tagged amounts
//! let total = Money::euro(1234, 2)
//!     .checked_add(&Money::euro(5, 1))
//!     .unwrap();
//! assert_eq!(total.to_string(), "12.84 EUR");
//!
//! // Mixing currencies is rejected
//! assert!(total.checked_add(&Money::us_dollar(1, 0)).is_err());
//! ```

#[cfg(feature = "logging")]
pub mod logging;
pub mod money;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{
        Currency, DecodePolicy, Money, MoneyConfig, MoneyError, MoneyResult, Unit,
    };
    pub use crate::numeric::{
        FixedDecimal, NumericError, NumericResult, Percent, MAX_PRECISION,
    };
}
