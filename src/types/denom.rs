// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denom string classification

use serde::{Deserialize, Serialize};

use crate::config::constants::{IBC_DENOM_PREFIX, POOL_SHARE_DENOM_PREFIX};

/// What kind of token a denom string names
///
/// Classification is purely by prefix; it says nothing about whether a
/// registry knows the denom.
///
/// # Examples
///
/// ```
/// use coinscale::DenomKind;
///
/// assert_eq!(DenomKind::classify("ubtsg"), DenomKind::Native);
/// assert_eq!(DenomKind::classify("gamm/pool/1"), DenomKind::PoolShare);
/// assert!(DenomKind::classify("ibc/27394FB0").is_ibc_voucher());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DenomKind {
    /// Issued on this chain (`ubtsg`, `uosmo`, `ftXXXX`, `factory/...`)
    Native,
    /// ICS-20 voucher, `ibc/<HASH>`
    IbcVoucher,
    /// Osmosis liquidity pool share, `gamm/pool/<ID>`
    PoolShare,
}

impl DenomKind {
    pub fn classify(denom: &str) -> Self {
        if denom.starts_with(IBC_DENOM_PREFIX) {
            DenomKind::IbcVoucher
        } else if denom.starts_with(POOL_SHARE_DENOM_PREFIX) {
            DenomKind::PoolShare
        } else {
            DenomKind::Native
        }
    }

    pub const fn is_ibc_voucher(self) -> bool {
        matches!(self, DenomKind::IbcVoucher)
    }

    pub const fn is_pool_share(self) -> bool {
        matches!(self, DenomKind::PoolShare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DenomKind::classify("uosmo"), DenomKind::Native);
        assert_eq!(
            DenomKind::classify("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"),
            DenomKind::IbcVoucher
        );
        assert_eq!(DenomKind::classify("gamm/pool/678"), DenomKind::PoolShare);
    }

    #[test]
    fn test_prefix_must_be_exact() {
        // "ibcx" is a plausible native ticker, not a voucher
        assert_eq!(DenomKind::classify("ibcx"), DenomKind::Native);
        assert_eq!(DenomKind::classify("gamm"), DenomKind::Native);
    }
}
