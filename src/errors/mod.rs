// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the coinscale library.
//!
//! Follows the same hybrid approach throughout:
//!
//! - **Module-specific errors** for fine-grained handling ([`ConversionError`],
//!   [`RegistryError`])
//! - **Unified error type** ([`CoinscaleError`]) when the source doesn't matter
//!
//! Note that most "failures" in this crate are not errors at all. A coin whose
//! denom unit is missing from its asset passes through unchanged, and a coin
//! whose denom is in no registry gets the fixed-exponent fallback. Only a
//! malformed amount string, an out-of-range scaling exponent, or an unreadable
//! registry surfaces as an `Err`.
//!
//! # Examples
//!
//! ```rust
//! use coinscale::{scale_by_exponent, ConversionError};
//!
//! match scale_by_exponent("12abc", 6) {
//!     Ok(scaled) => println!("scaled: {scaled}"),
//!     Err(ConversionError::InvalidAmount { amount, .. }) => {
//!         eprintln!("dropping coin with malformed amount {amount}");
//!     }
//!     Err(ConversionError::ExponentOutOfRange { exponent, .. }) => {
//!         eprintln!("refusing to scale by 10^{exponent}");
//!     }
//! }
//! ```

mod conversion;
mod registry;

pub use conversion::ConversionError;
pub use registry::RegistryError;

/// Unified error type for all coinscale operations.
///
/// All module-specific error types convert into `CoinscaleError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CoinscaleError {
    /// Error from amount parsing or arithmetic.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from loading an asset registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
