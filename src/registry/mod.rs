// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset registries
//!
//! Registries are immutable snapshots built once at startup, from
//! chain-registry JSON or in code, and passed by reference into the
//! conversion engine. Every registry shape answers the same single question
//! through [`AssetLookup`]: which asset has this base denom?
//!
//! - [`AssetRegistry`] - one chain's own assets (`assetlist.json`)
//! - [`IbcAssetGroup`] - one counterparty's assets as seen through an IBC channel
//! - [`IbcAssetMapping`] - ordered groups, searched as a fallback

mod asset_list;
mod ibc;

pub use asset_list::AssetRegistry;
pub use ibc::{ibc_denom, IbcAssetGroup, IbcAssetMapping};

use crate::types::Asset;

/// Lookup of assets by base denom
///
/// Implementations scan in order and return the first match, so a registry
/// with duplicated base denoms resolves deterministically instead of failing.
pub trait AssetLookup {
    /// First asset whose `base` equals `denom`
    fn find_by_base(&self, denom: &str) -> Option<&Asset>;
}

impl AssetLookup for [Asset] {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        self.iter().find(|asset| asset.base == denom)
    }
}

impl AssetLookup for Vec<Asset> {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        self.as_slice().find_by_base(denom)
    }
}

impl<T: AssetLookup + ?Sized> AssetLookup for &T {
    fn find_by_base(&self, denom: &str) -> Option<&Asset> {
        (**self).find_by_base(denom)
    }
}
