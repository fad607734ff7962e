// ============================================================================
// Money Module
// Currency-tagged amounts built on the fixed-point engine
// ============================================================================

pub mod config;
mod currency;
mod errors;
#[cfg(feature = "serde")]
mod json;
mod tagged;

pub use config::{DecodePolicy, MoneyConfig};
pub use currency::{Currency, Unit};
pub use errors::{MoneyError, MoneyResult};
pub use tagged::Money;
