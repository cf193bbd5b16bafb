//! Exact denomination conversion and IBC asset resolution for Cosmos SDK coins
//!
//! Converts coin amounts between base units and display units using the
//! exponents declared in chain-registry asset metadata, resolves which asset
//! a balance belongs to (native, IBC voucher, or unknown), and compares and
//! sums amounts without ever going through floating point.
//!
//! # Quick start
//!
//! ```
//! use coinscale::{
//!     to_base, to_display, resolve_display_coin, Asset, AssetRegistry, Coin, IbcAssetMapping,
//! };
//!
//! let atom = Asset::with_exponent("uatom", "atom", 6);
//!
//! let display = to_display(&Coin::new("uatom", "1500000"), &atom).unwrap();
//! assert_eq!(display, Coin::new("atom", "1.5"));
//! assert_eq!(to_base(&display, &atom).unwrap(), Coin::new("uatom", "1500000"));
//!
//! let registry = AssetRegistry::new("cosmoshub", vec![atom]);
//! let coin = resolve_display_coin(&Coin::new("uatom", "42"), &registry, &IbcAssetMapping::default())
//!     .unwrap();
//! assert_eq!(coin.amount, "0.000042");
//! ```

mod config;
mod convert;
mod errors;
mod registry;
mod resolve;
mod spans;
mod types;

pub use config::constants;
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use convert::*;
pub use errors::*;
pub use registry::*;
pub use resolve::*;
pub use types::*;
