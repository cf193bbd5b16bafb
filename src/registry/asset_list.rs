// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single-chain asset registry

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::AssetLookup;
use crate::errors::RegistryError;
use crate::spans;
use crate::types::Asset;

/// One chain's asset list
///
/// Deserializes from the chain-registry `assetlist.json` shape:
///
/// ```json
/// { "chain_name": "bitsong", "assets": [ { "base": "ubtsg", ... } ] }
/// ```
///
/// # Examples
///
/// ```
/// use coinscale::{Asset, AssetLookup, AssetRegistry};
///
/// let registry = AssetRegistry::new("bitsong", vec![Asset::with_exponent("ubtsg", "btsg", 6)]);
/// assert_eq!(registry.find_by_base("ubtsg").map(|a| a.display.as_str()), Some("btsg"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRegistry {
    pub chain_name: String,
    pub assets: Vec<Asset>,
}

impl AssetRegistry {
    /// Create a registry from assets already in memory
    pub fn new(chain_name: impl Into<String>, assets: Vec<Asset>) -> Self {
        Self {
            chain_name: chain_name.into(),
            assets,
        }
    }

    /// Parse a chain-registry asset list
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] if `json` is not a valid asset list.
    /// Questionable contents (see [`audit`](Self::audit)) only log warnings.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let span = spans::load_registry("str");
        let _guard = span.enter();

        let registry: Self = serde_json::from_str(json)?;
        registry.audit();
        Ok(registry)
    }

    /// Parse a chain-registry asset list from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RegistryError> {
        let span = spans::load_registry("reader");
        let _guard = span.enter();

        let registry: Self = serde_json::from_reader(reader)?;
        registry.audit();
        Ok(registry)
    }

    /// Read and parse a chain-registry asset list file
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file can't be read and
    /// [`RegistryError::Json`] if it isn't a valid asset list.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True if the registry has no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over assets in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Log metadata problems that make conversions degrade
    ///
    /// Returns the number of problems found. Nothing is rejected: an asset
    /// without a display unit still resolves, its coins just pass through
    /// unconverted.
    pub fn audit(&self) -> usize {
        audit_assets(&self.chain_name, &self.assets)
    }
}

pub(crate) fn audit_assets(chain_name: &str, assets: &[Asset]) -> usize {
    let mut problems = 0;
    let mut seen = HashSet::new();

    for asset in assets {
        if !seen.insert(asset.base.as_str()) {
            tracing::warn!(
                chain_name = %chain_name,
                base = %asset.base,
                "Duplicate base denom in registry, first entry wins"
            );
            problems += 1;
        }

        if asset.display_unit().is_none() {
            tracing::warn!(
                chain_name = %chain_name,
                base = %asset.base,
                display = %asset.display,
                "Asset has no denom unit for its display denom, coins will pass through unconverted"
            );
            problems += 1;
        }

        for unit in asset.denom_units.iter().filter(|unit| !unit.is_reasonable()) {
            tracing::warn!(
                chain_name = %chain_name,
                denom = %unit.denom,
                exponent = unit.exponent,
                "Denom unit exponent is outside the usual 0-18 range"
            );
            problems += 1;
        }
    }

    problems
}

impl AssetLookup for AssetRegistry {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        self.assets.find_by_base(denom)
    }
}

impl<'a> IntoIterator for &'a AssetRegistry {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DenomUnit;

    const BITSONG_ASSETS: &str = r#"{
        "$schema": "../assetlist.schema.json",
        "chain_name": "bitsong",
        "assets": [
            {
                "description": "BitSong Native Token",
                "denom_units": [
                    {"denom": "ubtsg", "exponent": 0},
                    {"denom": "btsg", "exponent": 6}
                ],
                "base": "ubtsg",
                "name": "BitSong",
                "display": "btsg",
                "symbol": "BTSG"
            },
            {
                "denom_units": [
                    {"denom": "ft2D8E7041556CE93E1EFD66C07C45D551A6AAAE09", "exponent": 0},
                    {"denom": "clay", "exponent": 6}
                ],
                "base": "ft2D8E7041556CE93E1EFD66C07C45D551A6AAAE09",
                "display": "clay",
                "symbol": "CLAY"
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let registry = AssetRegistry::from_json_str(BITSONG_ASSETS).unwrap();
        assert_eq!(registry.chain_name, "bitsong");
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .find_by_base("ft2D8E7041556CE93E1EFD66C07C45D551A6AAAE09")
                .map(|a| a.display.as_str()),
            Some("clay")
        );
    }

    #[test]
    fn test_from_reader() {
        let registry = AssetRegistry::from_reader(BITSONG_ASSETS.as_bytes()).unwrap();
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = AssetRegistry::from_json_str(r#"{"chain_name": 7}"#).unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AssetRegistry::from_json_file("/nonexistent/assetlist.json").unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_audit_counts_problems() {
        let registry = AssetRegistry::new(
            "testchain",
            vec![
                Asset::with_exponent("ufoo", "foo", 6),
                Asset::with_exponent("ufoo", "foo", 6),
                Asset::new("ubar", "bar", vec![DenomUnit::new("ubar", 0)]),
                Asset::with_exponent("wei", "eth", 24),
            ],
        );
        // duplicate + missing display unit + unreasonable exponent
        assert_eq!(registry.audit(), 3);
    }

    #[test]
    fn test_audit_clean_registry() {
        let registry = AssetRegistry::from_json_str(BITSONG_ASSETS).unwrap();
        assert_eq!(registry.audit(), 0);
    }
}
