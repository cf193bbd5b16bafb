// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset metadata types, in the chain-registry `assetlist.json` shape

use serde::{Deserialize, Serialize};

use crate::config::constants::MAX_REASONABLE_EXPONENT;

/// One unit of account for an asset
///
/// The base unit has exponent 0; the display unit of a typical Cosmos asset
/// has exponent 6 (`ubtsg` → `btsg`, `uatom` → `atom`).
///
/// # Examples
///
/// ```
/// use coinscale::DenomUnit;
///
/// let unit = DenomUnit::new("atom", 6);
/// assert!(unit.is_reasonable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl DenomUnit {
    /// Create a unit without aliases
    pub fn new(denom: impl Into<String>, exponent: u32) -> Self {
        Self {
            denom: denom.into(),
            exponent,
            aliases: Vec::new(),
        }
    }

    /// Add an alias for this unit
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Check if the exponent is in the usual range (0-18)
    ///
    /// Larger exponents are legal but almost always a data error.
    pub const fn is_reasonable(&self) -> bool {
        self.exponent <= MAX_REASONABLE_EXPONENT
    }
}

/// An asset and its units of account
///
/// Optional chain-registry fields beyond `name` and `symbol` (logo URIs,
/// coingecko ids, ...) are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Base denom, the smallest on-chain unit
    pub base: String,
    /// Display denom, must also appear in `denom_units`
    pub display: String,
    pub denom_units: Vec<DenomUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Asset {
    /// Create an asset from its base denom, display denom, and units
    pub fn new(
        base: impl Into<String>,
        display: impl Into<String>,
        denom_units: Vec<DenomUnit>,
    ) -> Self {
        Self {
            base: base.into(),
            display: display.into(),
            denom_units,
            name: None,
            symbol: None,
        }
    }

    /// Common two-unit asset: `base` at exponent 0, `display` at `exponent`
    ///
    /// ```
    /// use coinscale::Asset;
    ///
    /// let atom = Asset::with_exponent("uatom", "atom", 6);
    /// assert_eq!(atom.display_unit().map(|u| u.exponent), Some(6));
    /// ```
    pub fn with_exponent(base: impl Into<String>, display: impl Into<String>, exponent: u32) -> Self {
        let base = base.into();
        let display = display.into();
        let units = vec![
            DenomUnit::new(base.clone(), 0),
            DenomUnit::new(display.clone(), exponent),
        ];
        Self::new(base, display, units)
    }

    /// Set the human-readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ticker symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// First unit whose `denom` is exactly `denom`
    ///
    /// Aliases are descriptive only and never match.
    pub fn unit(&self, denom: &str) -> Option<&DenomUnit> {
        self.denom_units.iter().find(|unit| unit.denom == denom)
    }

    /// The unit matching `display`, if the metadata has one
    pub fn display_unit(&self) -> Option<&DenomUnit> {
        self.unit(&self.display)
    }
}

/// Which way a conversion moves the decimal point
///
/// The rescaled amount is `amount × 10^(signum · exponent)`. Going from the
/// base unit to a larger unit divides ([`Down`](Self::Down)); going back
/// multiplies ([`Up`](Self::Up)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleDirection {
    /// Multiply by `10^exponent` (display → base)
    Up,
    /// Divide by `10^exponent` (base → display)
    Down,
}

impl ScaleDirection {
    /// `+1` for [`Up`](Self::Up), `-1` for [`Down`](Self::Down)
    pub const fn signum(self) -> i64 {
        match self {
            ScaleDirection::Up => 1,
            ScaleDirection::Down => -1,
        }
    }

    /// The power of ten applied for a unit with `exponent`
    pub const fn power(self, exponent: u32) -> i64 {
        self.signum() * exponent as i64
    }
}

impl TryFrom<i8> for ScaleDirection {
    type Error = i8;

    /// Accepts exactly `1` or `-1`; anything else is handed back.
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ScaleDirection::Up),
            -1 => Ok(ScaleDirection::Down),
            other => Err(other),
        }
    }
}

impl From<ScaleDirection> for i64 {
    fn from(value: ScaleDirection) -> Self {
        value.signum()
    }
}
