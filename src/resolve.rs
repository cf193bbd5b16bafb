// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display asset resolution for coins of unknown origin
//!
//! A balance can hold native coins, IBC vouchers, pool shares, and denoms no
//! registry has heard of. Resolution tries the primary registry, then each
//! IBC group in order, and finally falls back to a fixed exponent:
//!
//! ```text
//! coin.denom ──► primary registry ──hit──► to_display        (Primary)
//!                     │ miss
//!                     ▼
//!               IBC groups, in order ──hit──► to_display     (Ibc)
//!                     │ miss
//!                     ▼
//!               amount / 10^fallback, denom untouched        (Fallback)
//! ```
//!
//! The fallback is a guess. It is right for most `u`-prefixed Cosmos
//! assets and wrong for 18-decimal tokens and pool shares, which is why
//! [`DenomResolver`] reports how each coin was resolved.

use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_FALLBACK_EXPONENT;
use crate::config::ResolverConfig;
use crate::convert::to_display;
use crate::errors::ConversionError;
use crate::registry::{AssetLookup, AssetRegistry, IbcAssetMapping};
use crate::spans;
use crate::types::{Coin, DenomKind, ScaleDirection};

/// Where a resolved coin's display metadata came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionSource {
    /// Found in the primary registry
    Primary,
    /// Found in the IBC group for `chain_name`
    Ibc { chain_name: String },
    /// Found nowhere; scaled by the fallback exponent
    Fallback,
}

impl ResolutionSource {
    /// True if the amount is backed by registry metadata
    pub fn is_exact(&self) -> bool {
        !matches!(self, ResolutionSource::Fallback)
    }
}

/// A display coin and how it was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub coin: Coin,
    pub source: ResolutionSource,
}

/// Resolve the display form of `coin`
///
/// Searches `primary`, then every group of `ibc`, for an asset whose base is
/// `coin.denom` and converts with [`to_display`]. A coin found nowhere is
/// divided by 10^6 and keeps its denom. Callers needing strict results should
/// filter unrecognized denoms themselves, or use [`DenomResolver`] which
/// reports the [`ResolutionSource`].
///
/// # Errors
///
/// Returns [`ConversionError::InvalidAmount`] if the coin amount is malformed,
/// or [`ConversionError::ExponentOutOfRange`] if the exponent used is out of
/// range. An unknown denom is never an error.
///
/// # Examples
///
/// ```
/// use coinscale::{resolve_display_coin, Asset, AssetRegistry, Coin, IbcAssetMapping};
///
/// let bitsong = AssetRegistry::new("bitsong", vec![Asset::with_exponent("ubtsg", "btsg", 6)]);
/// let ibc = IbcAssetMapping::default();
///
/// let known = resolve_display_coin(&Coin::new("ubtsg", "2000000"), &bitsong, &ibc).unwrap();
/// assert_eq!(known, Coin::new("btsg", "2"));
///
/// let unknown = resolve_display_coin(&Coin::new("ibc/ABCDEF", "2000000"), &bitsong, &ibc).unwrap();
/// assert_eq!(unknown, Coin::new("ibc/ABCDEF", "2"));
/// ```
pub fn resolve_display_coin<P>(
    coin: &Coin,
    primary: &P,
    ibc: &IbcAssetMapping,
) -> Result<Coin, ConversionError>
where
    P: AssetLookup + ?Sized,
{
    resolve_with_fallback(coin, primary, ibc, DEFAULT_FALLBACK_EXPONENT).map(|r| r.coin)
}

fn resolve_with_fallback<P>(
    coin: &Coin,
    primary: &P,
    ibc: &IbcAssetMapping,
    fallback_exponent: u32,
) -> Result<Resolved, ConversionError>
where
    P: AssetLookup + ?Sized,
{
    let span = spans::resolve_display_coin(&coin.denom);
    let _guard = span.enter();

    if let Some(asset) = primary.find_by_base(&coin.denom) {
        return Ok(Resolved {
            coin: to_display(coin, asset)?,
            source: ResolutionSource::Primary,
        });
    }

    if let Some((group, asset)) = ibc.find_with_group(&coin.denom) {
        return Ok(Resolved {
            coin: to_display(coin, asset)?,
            source: ResolutionSource::Ibc {
                chain_name: group.chain_name.clone(),
            },
        });
    }

    tracing::warn!(
        denom = %coin.denom,
        fallback_exponent = fallback_exponent,
        "Denom not in any registry, display amount is approximate"
    );

    let amount = coin.decimal_amount()?;
    let scaled = amount.scaled(ScaleDirection::Down.power(fallback_exponent))?;

    Ok(Resolved {
        coin: Coin::from_amount(coin.denom.clone(), &scaled),
        source: ResolutionSource::Fallback,
    })
}

/// Resolver bound to one chain's registries
///
/// Built once at startup and shared by reference; it holds no mutable state.
///
/// # Examples
///
/// ```
/// use coinscale::{
///     Asset, AssetRegistry, Coin, DenomResolver, IbcAssetGroup, IbcAssetMapping,
///     ResolutionSource, ResolverConfig,
/// };
///
/// let osmosis = AssetRegistry::new("osmosis", vec![Asset::with_exponent("uosmo", "osmo", 6)]);
/// let bitsong = AssetRegistry::new("bitsong", vec![Asset::with_exponent("ubtsg", "btsg", 6)]);
/// let ibc = IbcAssetMapping::default()
///     .with_group(IbcAssetGroup::from_counterparty(&bitsong, "transfer", "channel-73"));
///
/// let resolver = DenomResolver::new(&osmosis, &ibc, ResolverConfig::default());
///
/// let balances = vec![
///     Coin::new("uosmo", "5000000"),
///     Coin::new("gamm/pool/1", "100000000000000000000"),
///     Coin::new("ibc/UNKNOWN", "1"),
/// ];
/// let shown = resolver.display_balances(&balances);
/// assert_eq!(shown, vec![Coin::new("osmo", "5")]);
///
/// let resolved = resolver.resolve(&Coin::new("ibc/UNKNOWN", "1")).unwrap();
/// assert_eq!(resolved.source, ResolutionSource::Fallback);
/// ```
#[derive(Debug, Clone)]
pub struct DenomResolver<'a> {
    primary: &'a AssetRegistry,
    ibc: &'a IbcAssetMapping,
    config: ResolverConfig,
}

impl<'a> DenomResolver<'a> {
    pub fn new(primary: &'a AssetRegistry, ibc: &'a IbcAssetMapping, config: ResolverConfig) -> Self {
        Self {
            primary,
            ibc,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve one coin, reporting where its metadata came from
    ///
    /// Same search order as [`resolve_display_coin`], using the configured
    /// fallback exponent.
    pub fn resolve(&self, coin: &Coin) -> Result<Resolved, ConversionError> {
        resolve_with_fallback(coin, self.primary, self.ibc, self.config.fallback_exponent)
    }

    /// Display forms of raw balances, for a wallet balance list
    ///
    /// Order is preserved. Per the config, pool shares are skipped and coins
    /// that only resolved through the fallback are dropped. A coin with a
    /// malformed amount is dropped with a warning rather than failing the
    /// whole list.
    pub fn display_balances(&self, balances: &[Coin]) -> Vec<Coin> {
        let span = spans::display_balances(balances.len(), &self.primary.chain_name);
        let _guard = span.enter();

        balances
            .iter()
            .filter(|coin| {
                !(self.config.skip_pool_shares && DenomKind::classify(&coin.denom).is_pool_share())
            })
            .filter_map(|coin| match self.resolve(coin) {
                Ok(resolved) if resolved.source.is_exact() || self.config.keep_unrecognized => {
                    Some(resolved.coin)
                }
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(
                        denom = %coin.denom,
                        error = %e,
                        "Dropping balance with malformed amount"
                    );
                    None
                }
            })
            .collect()
    }
}
