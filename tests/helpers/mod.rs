// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for coinscale integration tests
//!
//! Registries here are trimmed copies of the chain-registry entries for
//! BitSong, Osmosis, and the Cosmos Hub.

#![allow(dead_code)]

use coinscale::constants::TRANSFER_PORT;
use coinscale::{Asset, AssetRegistry, DenomUnit, IbcAssetGroup, IbcAssetMapping};

/// Channel on Osmosis that receives BitSong tokens
pub const OSMOSIS_TO_BITSONG_CHANNEL: &str = "channel-73";

/// Channel on Osmosis that receives Cosmos Hub tokens
pub const OSMOSIS_TO_COSMOSHUB_CHANNEL: &str = "channel-0";

/// ATOM as seen on Osmosis over channel-0
pub const ATOM_ON_OSMOSIS: &str =
    "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

pub const BITSONG_ASSETLIST: &str = r#"{
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
            "symbol": "BTSG",
            "logo_URIs": {"png": "https://example.invalid/btsg.png"},
            "coingecko_id": "bitsong"
        },
        {
            "denom_units": [
                {"denom": "ft2D8E7041556CE93E1EFD66C07C45D551A6AAAE09", "exponent": 0},
                {"denom": "clay", "exponent": 6}
            ],
            "base": "ft2D8E7041556CE93E1EFD66C07C45D551A6AAAE09",
            "name": "Nicola Fasano Fan Token",
            "display": "clay",
            "symbol": "CLAY"
        }
    ]
}"#;

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn atom() -> Asset {
    Asset::new(
        "uatom",
        "atom",
        vec![DenomUnit::new("uatom", 0), DenomUnit::new("atom", 6)],
    )
    .with_name("Cosmos Hub Atom")
    .with_symbol("ATOM")
}

pub fn btsg() -> Asset {
    Asset::with_exponent("ubtsg", "btsg", 6).with_symbol("BTSG")
}

pub fn bitsong_registry() -> AssetRegistry {
    AssetRegistry::from_json_str(BITSONG_ASSETLIST).expect("fixture is valid JSON")
}

pub fn cosmoshub_registry() -> AssetRegistry {
    AssetRegistry::new("cosmoshub", vec![atom()])
}

pub fn osmosis_registry() -> AssetRegistry {
    AssetRegistry::new(
        "osmosis",
        vec![
            Asset::with_exponent("uosmo", "osmo", 6).with_symbol("OSMO"),
            Asset::with_exponent("uion", "ion", 6).with_symbol("ION"),
        ],
    )
}

/// The IBC map an Osmosis-side dashboard would assemble
pub fn osmosis_ibc_mapping() -> IbcAssetMapping {
    IbcAssetMapping::default()
        .with_group(IbcAssetGroup::from_counterparty(
            &bitsong_registry(),
            TRANSFER_PORT,
            OSMOSIS_TO_BITSONG_CHANNEL,
        ))
        .with_group(IbcAssetGroup::from_counterparty(
            &cosmoshub_registry(),
            TRANSFER_PORT,
            OSMOSIS_TO_COSMOSHUB_CHANNEL,
        ))
}
