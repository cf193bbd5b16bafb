// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal amount type

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::config::constants::MAX_SCALE_EXPONENT;
use crate::errors::ConversionError;

/// Arbitrary-precision decimal amount
///
/// On-chain amounts are integers that routinely exceed what an `f64` can
/// represent exactly (10^18 and up), and display amounts are those integers
/// shifted by a power of ten. `DecimalAmount` keeps both exact: scaling only
/// moves the decimal point, and addition never rounds.
///
/// Equality and ordering are numeric, so `"1.50"` and `"1.5"` compare equal.
/// [`Display`](fmt::Display) always produces the canonical plain form: no
/// exponent notation, no trailing fractional zeros.
///
/// # Examples
///
/// ```
/// use coinscale::DecimalAmount;
///
/// let base: DecimalAmount = "1500000".parse().unwrap();
/// let display = base.scaled(-6).unwrap();
/// assert_eq!(display.to_string(), "1.5");
/// assert_eq!(display.scaled(6).unwrap(), base);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecimalAmount(BigDecimal);

impl DecimalAmount {
    /// Zero amount
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Wrap an existing `BigDecimal`
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Get a reference to the inner `BigDecimal`
    pub fn as_bigdecimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consume into the inner `BigDecimal`
    pub fn into_bigdecimal(self) -> BigDecimal {
        self.0
    }

    /// Multiply by `10^exponent`
    ///
    /// Exact: only the decimal scale changes, the digits are left alone. A
    /// negative exponent divides.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::ExponentOutOfRange`] if `|exponent|`
    /// exceeds [`MAX_SCALE_EXPONENT`].
    ///
    /// ```
    /// use coinscale::DecimalAmount;
    ///
    /// let display: DecimalAmount = "0.000001".parse().unwrap();
    /// assert_eq!(display.scaled(6).unwrap().to_string(), "1");
    /// assert_eq!(display.scaled(-12).unwrap().to_string(), "0.000000000000000001");
    /// assert!(display.scaled(i64::MIN).is_err());
    /// ```
    pub fn scaled(&self, exponent: i64) -> Result<Self, ConversionError> {
        let out_of_range = || ConversionError::exponent_out_of_range(self.to_string(), exponent);

        if exponent.unsigned_abs() > MAX_SCALE_EXPONENT.unsigned_abs() {
            return Err(out_of_range());
        }

        let (digits, scale) = self.0.as_bigint_and_exponent();
        let scale = scale.checked_sub(exponent).ok_or_else(out_of_range)?;
        Ok(Self(BigDecimal::new(digits, scale)))
    }

    /// True if the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Compare against another amount
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Check that `input` is a plain decimal literal and return it with empty
/// integer or fraction parts filled in, so `".5"` becomes `"0.5"`.
fn validate_plain_decimal(input: &str) -> Result<String, ConversionError> {
    let unsigned = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    let negative = input.starts_with('-');

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.is_empty() && fraction.map_or(true, str::is_empty) {
        return Err(ConversionError::invalid_amount(input, "no digits"));
    }

    let digits = integer.chars().chain(fraction.unwrap_or_default().chars());
    for c in digits {
        if !c.is_ascii_digit() {
            return Err(ConversionError::invalid_amount(
                input,
                format!("unexpected character {c:?}"),
            ));
        }
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    let sign = if negative { "-" } else { "" };
    Ok(match fraction {
        Some(fraction) if !fraction.is_empty() => format!("{sign}{integer}.{fraction}"),
        _ => format!("{sign}{integer}"),
    })
}

impl FromStr for DecimalAmount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = validate_plain_decimal(s)?;
        BigDecimal::from_str(&canonical)
            .map(Self)
            .map_err(|e| ConversionError::invalid_amount(s, e.to_string()))
    }
}

impl TryFrom<String> for DecimalAmount {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for DecimalAmount {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DecimalAmount> for String {
    fn from(value: DecimalAmount) -> Self {
        value.to_string()
    }
}

impl From<BigDecimal> for DecimalAmount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<u64> for DecimalAmount {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<i64> for DecimalAmount {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl Add for DecimalAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a DecimalAmount> for DecimalAmount {
    type Output = Self;

    fn add(self, rhs: &'a DecimalAmount) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Sum for DecimalAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always plain notation, even for 10^30 or 10^-18
        write!(f, "{}", self.0.normalized().to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> DecimalAmount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(amount("1500000").to_string(), "1500000");
    }

    #[test]
    fn test_parse_fraction_and_sign() {
        assert_eq!(amount("-0.25").to_string(), "-0.25");
        assert_eq!(amount("+3").to_string(), "3");
        assert_eq!(amount(".5").to_string(), "0.5");
        assert_eq!(amount("5.").to_string(), "5");
    }

    #[test]
    fn test_parse_rejects_exponent_notation() {
        let err = "1e6".parse::<DecimalAmount>().unwrap_err();
        assert_eq!(err.amount(), "1e6");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<DecimalAmount>().is_err());
        assert!("-".parse::<DecimalAmount>().is_err());
        assert!(".".parse::<DecimalAmount>().is_err());
        assert!("12abc".parse::<DecimalAmount>().is_err());
        assert!("1.2.3".parse::<DecimalAmount>().is_err());
        assert!("--1".parse::<DecimalAmount>().is_err());
        assert!("NaN".parse::<DecimalAmount>().is_err());
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        let err = " 1.5\n".parse::<DecimalAmount>().unwrap_err();
        assert_eq!(err.amount(), " 1.5\n");
        assert!("1 000".parse::<DecimalAmount>().is_err());
        assert!("\t7".parse::<DecimalAmount>().is_err());
    }

    #[test]
    fn test_display_strips_trailing_zeros() {
        assert_eq!(amount("1.500000").to_string(), "1.5");
        assert_eq!(amount("0.000").to_string(), "0");
        assert_eq!(amount("100").to_string(), "100");
    }

    #[test]
    fn test_display_never_uses_exponent() {
        let big = amount("1").scaled(30).unwrap();
        assert_eq!(big.to_string(), format!("1{}", "0".repeat(30)));

        let tiny = amount("1").scaled(-18).unwrap();
        assert_eq!(tiny.to_string(), "0.000000000000000001");
    }

    #[test]
    fn test_scaled_beyond_f64_precision() {
        // 2^64 + 1 is not representable as f64
        let raw = amount("18446744073709551617");
        let display = raw.scaled(-18).unwrap();
        assert_eq!(display.to_string(), "18.446744073709551617");
        assert_eq!(display.scaled(18).unwrap(), raw);
    }

    #[test]
    fn test_scaled_at_bound() {
        let one = amount("1");
        let big = one.scaled(MAX_SCALE_EXPONENT).unwrap();
        assert_eq!(big.to_string().len(), 1025);
        assert_eq!(big.scaled(-MAX_SCALE_EXPONENT).unwrap(), one);
    }

    #[test]
    fn test_scaled_out_of_range_is_an_error() {
        let one = amount("1");
        for exponent in [MAX_SCALE_EXPONENT + 1, -MAX_SCALE_EXPONENT - 1, i64::MAX, i64::MIN] {
            let err = one.scaled(exponent).unwrap_err();
            assert_eq!(err, ConversionError::exponent_out_of_range("1", exponent));
        }
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(amount("1.50"), amount("1.5"));
        assert!(amount("2") > amount("1.999999999999999999999"));
    }

    #[test]
    fn test_add_and_sum() {
        assert_eq!((amount("100") + amount("250")).to_string(), "350");
        let total: DecimalAmount = ["0.1", "0.2", "0.3"].iter().map(|s| amount(s)).sum();
        assert_eq!(total.to_string(), "0.6");
    }

    #[test]
    fn test_sign_checks() {
        assert!(amount("0").is_zero());
        assert!(amount("-0.1").is_negative());
        assert!(!amount("0").is_negative());
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(DecimalAmount::from(1_000_000u64).to_string(), "1000000");
        assert_eq!(DecimalAmount::from(-42i64).to_string(), "-42");
    }

    #[test]
    fn test_serialization() {
        let value = amount("1.5");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"1.5\"");
        let back: DecimalAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<DecimalAmount>("\"1e6\"").is_err());
    }
}
