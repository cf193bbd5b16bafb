// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin value type

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::DecimalAmount;
use crate::errors::ConversionError;

/// A denom plus an amount, in the Cosmos SDK JSON shape
///
/// The amount is kept as the string it arrived as, exactly like
/// `cosmos.base.v1beta1.Coin`. Balances from a query client are base-unit
/// integers; coins produced by display conversion may carry a fractional
/// or negative amount. Parse with [`Coin::decimal_amount`] before doing
/// arithmetic.
///
/// # Examples
///
/// ```
/// use coinscale::Coin;
///
/// let coin = Coin::new("uatom", "1500000");
/// assert_eq!(coin.to_string(), "1500000uatom");
/// assert_eq!(coin.decimal_amount().unwrap().scaled(-6).unwrap().to_string(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Chain-unique unit identifier, e.g. `uatom` or `ibc/27394FB0...`
    pub denom: String,
    /// Base-10 decimal string, never exponent notation
    pub amount: String,
}

impl Coin {
    /// Create a coin from a denom and an amount string
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Create a coin from an already-parsed amount
    pub fn from_amount(denom: impl Into<String>, amount: &DecimalAmount) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }

    /// Parse the amount string
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidAmount`] if the amount is not a plain
    /// decimal.
    pub fn decimal_amount(&self) -> Result<DecimalAmount, ConversionError> {
        self.amount.parse()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
