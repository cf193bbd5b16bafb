// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for amount conversions.

/// Errors that can occur while parsing or rescaling a coin amount.
///
/// A missing denom unit is deliberately *not* represented here: the
/// conversion functions return the input coin unchanged in that case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The amount string is not a plain base-10 decimal.
    ///
    /// Amounts must look like `"1500000"`, `"-0.25"` or `"1.5"`. Exponent
    /// notation (`"1e6"`), empty strings, surrounding whitespace and anything
    /// non-numeric are rejected.
    #[error("Invalid amount {amount:?}: {details}")]
    InvalidAmount {
        /// The rejected input, verbatim
        amount: String,
        /// Why it was rejected
        details: String,
    },

    /// Scaling by this power of ten is outside the supported range.
    ///
    /// See [`MAX_SCALE_EXPONENT`](crate::constants::MAX_SCALE_EXPONENT).
    #[error("Cannot scale amount {amount:?} by 10^{exponent}: exponent out of range")]
    ExponentOutOfRange {
        /// The amount being scaled, in canonical form
        amount: String,
        /// The requested power of ten
        exponent: i64,
    },
}

impl ConversionError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(amount: impl Into<String>, details: impl Into<String>) -> Self {
        ConversionError::InvalidAmount {
            amount: amount.into(),
            details: details.into(),
        }
    }

    /// Create an `ExponentOutOfRange` error.
    pub fn exponent_out_of_range(amount: impl Into<String>, exponent: i64) -> Self {
        ConversionError::ExponentOutOfRange {
            amount: amount.into(),
            exponent,
        }
    }

    /// The amount string the failed operation was given.
    pub fn amount(&self) -> &str {
        match self {
            ConversionError::InvalidAmount { amount, .. }
            | ConversionError::ExponentOutOfRange { amount, .. } => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_message_quotes_input() {
        let err = ConversionError::invalid_amount("12abc", "unexpected character 'a'");
        assert_eq!(
            err.to_string(),
            "Invalid amount \"12abc\": unexpected character 'a'"
        );
        assert_eq!(err.amount(), "12abc");
    }

    #[test]
    fn exponent_out_of_range_message() {
        let err = ConversionError::exponent_out_of_range("1", i64::MIN);
        assert_eq!(
            err.to_string(),
            format!("Cannot scale amount \"1\" by 10^{}: exponent out of range", i64::MIN)
        );
        assert_eq!(err.amount(), "1");
    }
}
