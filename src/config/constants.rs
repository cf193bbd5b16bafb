//! Well-known denominations and constants
//!
//! Centralizes the magic numbers and prefixes used throughout coinscale.

/// Exponent applied to coins no registry recognizes
///
/// Nearly every Cosmos asset uses a `u`-prefixed base unit six orders of
/// magnitude below its display unit, so dividing by 10^6 is the usual guess.
/// Pool shares (18) and some EVM-bridged tokens (18) make it wrong.
pub const DEFAULT_FALLBACK_EXPONENT: u32 = 6;

/// Exponent of micro units (`ubtsg`, `uatom`, fan tokens)
pub const MICRO_UNIT_EXPONENT: u32 = 6;

/// Largest exponent considered sane in registry data
pub const MAX_REASONABLE_EXPONENT: u32 = 18;

/// Largest power of ten an amount may be scaled by, in either direction
///
/// Far beyond any registry exponent; it bounds the length of the plain
/// string a scaled amount formats to.
pub const MAX_SCALE_EXPONENT: i64 = 1024;

/// ICS-20 fungible token transfer port
pub const TRANSFER_PORT: &str = "transfer";

/// Prefix of ICS-20 voucher denoms
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// Prefix of Osmosis GAMM pool share denoms
pub const POOL_SHARE_DENOM_PREFIX: &str = "gamm/pool/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_matches_micro_units() {
        assert_eq!(DEFAULT_FALLBACK_EXPONENT, MICRO_UNIT_EXPONENT);
    }

    #[test]
    fn test_scale_bound_covers_registry_exponents() {
        assert!(MAX_SCALE_EXPONENT > i64::from(MAX_REASONABLE_EXPONENT));
    }

    #[test]
    fn test_prefixes_end_with_separator() {
        assert!(IBC_DENOM_PREFIX.ends_with('/'));
        assert!(POOL_SHARE_DENOM_PREFIX.ends_with('/'));
    }
}
