//! Strong types for coins, amounts, and asset metadata
//!
//! # Type Relationships
//!
//! ```text
//! Coin { denom, amount: String }
//!     |
//!     | decimal_amount()
//!     ↓
//! DecimalAmount (BigDecimal, exact)
//!     |
//!     | scaled(± DenomUnit.exponent)
//!     ↓
//! DecimalAmount in the target unit  →  Coin { target denom, amount }
//! ```

mod amount;
mod asset;
mod coin;
mod denom;

pub use amount::DecimalAmount;
pub use asset::{Asset, DenomUnit, ScaleDirection};
pub use coin::Coin;
pub use denom::DenomKind;
