// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! IBC voucher assets

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use super::asset_list::audit_assets;
use super::{AssetLookup, AssetRegistry};
use crate::config::constants::IBC_DENOM_PREFIX;
use crate::errors::RegistryError;
use crate::spans;
use crate::types::Asset;

/// Derive the ICS-20 voucher denom for a token received over a channel
///
/// `ibc/` followed by the upper-case hex SHA-256 of the trace path
/// `{port}/{channel}/{base_denom}`. For multi-hop tokens pass the full path
/// prefix as `base_denom`, e.g. `transfer/channel-1/uatom`.
///
/// # Examples
///
/// ```
/// use coinscale::ibc_denom;
///
/// // ATOM on Osmosis
/// assert_eq!(
///     ibc_denom("transfer", "channel-0", "uatom"),
///     "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
/// );
/// ```
pub fn ibc_denom(port: &str, channel: &str, base_denom: &str) -> String {
    let path = format!("{port}/{channel}/{base_denom}");
    let hash = Sha256::digest(path.as_bytes());
    format!("{IBC_DENOM_PREFIX}{}", hex::encode_upper(hash))
}

/// One counterparty chain's assets, as vouchers on the local chain
///
/// Same JSON shape as the groups produced by chain-registry's IBC asset
/// utilities: `{ "chain_name": ..., "assets": [...] }`, where each asset's
/// `base` is the local `ibc/...` denom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcAssetGroup {
    pub chain_name: String,
    pub assets: Vec<Asset>,
}

impl IbcAssetGroup {
    /// Create a group from assets already in memory
    pub fn new(chain_name: impl Into<String>, assets: Vec<Asset>) -> Self {
        Self {
            chain_name: chain_name.into(),
            assets,
        }
    }

    /// Build the voucher view of a counterparty registry
    ///
    /// Every asset gets the voucher denom as its `base`. The base unit is
    /// renamed to the voucher denom and keeps its original name as an alias;
    /// the display denom and all other units are unchanged, so a voucher
    /// converts for display exactly like the original.
    ///
    /// ```
    /// use coinscale::{Asset, AssetLookup, AssetRegistry, IbcAssetGroup};
    ///
    /// let cosmoshub = AssetRegistry::new("cosmoshub", vec![Asset::with_exponent("uatom", "atom", 6)]);
    /// let group = IbcAssetGroup::from_counterparty(&cosmoshub, "transfer", "channel-0");
    ///
    /// let voucher = group
    ///     .find_by_base("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2")
    ///     .unwrap();
    /// assert_eq!(voucher.display, "atom");
    /// ```
    pub fn from_counterparty(counterparty: &AssetRegistry, port: &str, channel: &str) -> Self {
        let assets = counterparty
            .iter()
            .map(|asset| voucher_asset(asset, port, channel))
            .collect();

        Self::new(counterparty.chain_name.clone(), assets)
    }
}

fn voucher_asset(asset: &Asset, port: &str, channel: &str) -> Asset {
    let voucher = ibc_denom(port, channel, &asset.base);
    let mut denom_units = asset.denom_units.clone();

    if let Some(unit) = denom_units.iter_mut().find(|unit| unit.denom == asset.base) {
        let original = std::mem::replace(&mut unit.denom, voucher.clone());
        unit.aliases.push(original);
    }

    Asset {
        base: voucher,
        display: asset.display.clone(),
        denom_units,
        name: asset.name.clone(),
        symbol: asset.symbol.clone(),
    }
}

impl AssetLookup for IbcAssetGroup {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        self.assets.find_by_base(denom)
    }
}

/// Ordered IBC groups, searched when the primary registry has no match
///
/// Serializes as a plain JSON array of [`IbcAssetGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IbcAssetMapping(Vec<IbcAssetGroup>);

impl IbcAssetMapping {
    /// Create a mapping from groups, searched in the given order
    pub fn new(groups: Vec<IbcAssetGroup>) -> Self {
        Self(groups)
    }

    /// Parse a JSON array of groups
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] if `json` is not an array of groups.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let span = spans::load_registry("ibc_str");
        let _guard = span.enter();

        let mapping: Self = serde_json::from_str(json)?;
        for group in &mapping.0 {
            audit_assets(&group.chain_name, &group.assets);
        }
        Ok(mapping)
    }

    /// Read and parse a JSON array of groups from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Append a group; it is searched after all existing groups
    pub fn push(&mut self, group: IbcAssetGroup) {
        self.0.push(group);
    }

    /// Builder-style [`push`](Self::push)
    pub fn with_group(mut self, group: IbcAssetGroup) -> Self {
        self.push(group);
        self
    }

    /// Groups in search order
    pub fn groups(&self) -> &[IbcAssetGroup] {
        &self.0
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no groups
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First group holding an asset with base `denom`, together with that asset
    pub fn find_with_group(&self, denom: &str) -> Option<(&IbcAssetGroup, &Asset)> {
        self.0
            .iter()
            .find_map(|group| group.find_by_base(denom).map(|asset| (group, asset)))
    }
}

impl AssetLookup for IbcAssetMapping {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        self.find_with_group(denom).map(|(_, asset)| asset)
    }
}

impl FromIterator<IbcAssetGroup> for IbcAssetMapping {
    fn from_iter<T: IntoIterator<Item = IbcAssetGroup>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
