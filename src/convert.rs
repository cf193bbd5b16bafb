// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact unit conversion, comparison, and summation of coins
//!
//! Every function here is pure: it borrows its inputs and returns a fresh
//! [`Coin`]. All arithmetic goes through [`DecimalAmount`], so converting
//! `1500000uatom` to display units yields exactly `1.5atom`, and converting
//! back yields exactly `1500000uatom`.

use crate::config::constants::MICRO_UNIT_EXPONENT;
use crate::errors::ConversionError;
use crate::types::{Asset, Coin, DecimalAmount, ScaleDirection};

/// Rescale `coin` using the exponent of `source_denom`
///
/// The result is denominated in `target_denom` and its amount is
/// `coin.amount × 10^(direction · exponent)`, where `exponent` comes from the
/// unit of `asset` whose `denom` equals `source_denom`.
///
/// If `asset` has no unit named `source_denom` the coin is returned unchanged.
/// Unit aliases are not consulted.
/// Registry metadata is often incomplete and a display list must never fail
/// because of it, so this is a passthrough rather than an error.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidAmount`] if the unit matched and the
/// amount is not a plain decimal, and [`ConversionError::ExponentOutOfRange`]
/// if the unit's exponent exceeds
/// [`MAX_SCALE_EXPONENT`](crate::constants::MAX_SCALE_EXPONENT).
///
/// # Examples
///
/// ```
/// use coinscale::{to_unit, Asset, Coin, DenomUnit, ScaleDirection};
///
/// let atom = Asset::new(
///     "uatom",
///     "atom",
///     vec![DenomUnit::new("uatom", 0), DenomUnit::new("matom", 3), DenomUnit::new("atom", 6)],
/// );
/// let coin = Coin::new("uatom", "2500");
///
/// let milli = to_unit(&coin, &atom, "matom", "matom", ScaleDirection::Down).unwrap();
/// assert_eq!(milli, Coin::new("matom", "2.5"));
/// ```
pub fn to_unit(
    coin: &Coin,
    asset: &Asset,
    source_denom: &str,
    target_denom: &str,
    direction: ScaleDirection,
) -> Result<Coin, ConversionError> {
    let Some(unit) = asset.unit(source_denom) else {
        tracing::debug!(
            denom = %coin.denom,
            source_denom = %source_denom,
            asset = %asset.base,
            "No denom unit for source denom, returning coin unchanged"
        );
        return Ok(coin.clone());
    };

    let amount = coin.decimal_amount()?;
    let scaled = amount.scaled(direction.power(unit.exponent))?;

    Ok(Coin::from_amount(target_denom, &scaled))
}

/// Convert a base-unit coin to the asset's display unit
///
/// ```
/// use coinscale::{to_display, Asset, Coin};
///
/// let atom = Asset::with_exponent("uatom", "atom", 6);
/// let display = to_display(&Coin::new("uatom", "1500000"), &atom).unwrap();
/// assert_eq!(display, Coin::new("atom", "1.5"));
/// ```
pub fn to_display(coin: &Coin, asset: &Asset) -> Result<Coin, ConversionError> {
    to_unit(coin, asset, &asset.display, &asset.display, ScaleDirection::Down)
}

/// Convert a display-unit coin back to the asset's base unit
///
/// ```
/// use coinscale::{to_base, Asset, Coin};
///
/// let atom = Asset::with_exponent("uatom", "atom", 6);
/// let base = to_base(&Coin::new("atom", "1.5"), &atom).unwrap();
/// assert_eq!(base, Coin::new("uatom", "1500000"));
/// ```
pub fn to_base(coin: &Coin, asset: &Asset) -> Result<Coin, ConversionError> {
    to_unit(coin, asset, &asset.display, &asset.base, ScaleDirection::Up)
}

/// Multiply a decimal string by `10^exponent`
///
/// The primitive behind the unit conversions, also handy on its own for
/// turning a user-entered quantity into base units before building a message.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidAmount`] if `amount` is not a plain
/// decimal, and [`ConversionError::ExponentOutOfRange`] if `|exponent|`
/// exceeds [`MAX_SCALE_EXPONENT`](crate::constants::MAX_SCALE_EXPONENT).
///
/// ```
/// use coinscale::scale_by_exponent;
///
/// assert_eq!(scale_by_exponent("21000000", 6).unwrap(), "21000000000000");
/// assert_eq!(scale_by_exponent("1", -18).unwrap(), "0.000000000000000001");
/// ```
pub fn scale_by_exponent(amount: &str, exponent: i64) -> Result<String, ConversionError> {
    let amount: DecimalAmount = amount.parse()?;
    Ok(amount.scaled(exponent)?.to_string())
}

/// Convert a display quantity to micro units (`× 10^6`)
///
/// Fan token max supply and mint amounts are entered in whole tokens and sent
/// on chain in micro units.
pub fn to_micro_unit(amount: &str) -> Result<String, ConversionError> {
    scale_by_exponent(amount, i64::from(MICRO_UNIT_EXPONENT))
}

/// Result of comparing a coin amount against a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountComparison {
    /// `amount > threshold`
    pub greater: bool,
    /// `amount >= threshold`
    pub greater_or_equal: bool,
}

/// Compare `coin.amount` against `threshold` exactly
///
/// The threshold is built by the caller from a string or an integer:
///
/// ```
/// use coinscale::{compare_amount, Coin, DecimalAmount};
///
/// let staked = Coin::new("btsg", "1000");
///
/// let cmp = compare_amount(&staked, &DecimalAmount::from(1000u64)).unwrap();
/// assert!(!cmp.greater);
/// assert!(cmp.greater_or_equal);
///
/// let cmp = compare_amount(&staked, &"999.999999".parse().unwrap()).unwrap();
/// assert!(cmp.greater);
/// ```
///
/// # Errors
///
/// Returns [`ConversionError::InvalidAmount`] if the coin amount is malformed.
pub fn compare_amount(
    coin: &Coin,
    threshold: &DecimalAmount,
) -> Result<AmountComparison, ConversionError> {
    let amount = coin.decimal_amount()?;

    Ok(AmountComparison {
        greater: amount > *threshold,
        greater_or_equal: amount >= *threshold,
    })
}

/// Add two coins of the same asset
///
/// The result is always denominated in `asset.base`. The input denoms are not
/// checked: only sum coins already known to be the same underlying asset.
///
/// ```
/// use coinscale::{sum_coins, Asset, Coin};
///
/// let atom = Asset::with_exponent("uatom", "atom", 6);
/// let total = sum_coins(&Coin::new("uatom", "100"), &Coin::new("uatom", "250"), &atom).unwrap();
/// assert_eq!(total, Coin::new("uatom", "350"));
/// ```
pub fn sum_coins(left: &Coin, right: &Coin, asset: &Asset) -> Result<Coin, ConversionError> {
    let total = left.decimal_amount()? + right.decimal_amount()?;
    Ok(Coin::from_amount(&asset.base, &total))
}

/// Add any number of coins of the same asset
///
/// Same contract as [`sum_coins`]; an empty input gives zero in `asset.base`.
/// Used to total a delegator's stake across validators.
pub fn sum_all<'a, I>(coins: I, asset: &Asset) -> Result<Coin, ConversionError>
where
    I: IntoIterator<Item = &'a Coin>,
{
    let total = coins
        .into_iter()
        .map(Coin::decimal_amount)
        .sum::<Result<DecimalAmount, _>>()?;

    Ok(Coin::from_amount(&asset.base, &total))
}
