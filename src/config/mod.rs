//! Configuration for denom resolution
//!
//! The pure conversion functions take no configuration. [`ResolverConfig`]
//! only controls the policies of [`DenomResolver`](crate::DenomResolver):
//! what to do with coins no registry knows.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use coinscale::ResolverConfig;
//!
//! // Divide unknown coins by 10^6, drop them from balance lists
//! let config = ResolverConfig::default();
//! assert_eq!(config.fallback_exponent, 6);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use coinscale::ResolverConfigBuilder;
//!
//! let config = ResolverConfigBuilder::new()
//!     .fallback_exponent(18)
//!     .keep_unrecognized(true)
//!     .build();
//! ```

pub mod constants;

use constants::DEFAULT_FALLBACK_EXPONENT;

/// Policies for resolving display coins
///
/// Use [`ResolverConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Exponent used to scale down coins found in no registry
    /// Default: 6
    pub fallback_exponent: u32,

    /// Keep fallback-scaled coins in balance lists
    /// Default: false (only registry-backed coins are shown)
    pub keep_unrecognized: bool,

    /// Drop `gamm/pool/*` shares from balance lists
    /// Default: true
    pub skip_pool_shares: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl ResolverConfig {
    /// Create config matching the wallet dashboard's balance views
    ///
    /// Unknown coins are divided by 10^6 when resolved individually, and
    /// left out of balance lists together with pool shares.
    pub fn with_common_defaults() -> Self {
        Self {
            fallback_exponent: DEFAULT_FALLBACK_EXPONENT,
            keep_unrecognized: false,
            skip_pool_shares: true,
        }
    }

    /// Create config that filters nothing out of balance lists
    ///
    /// Useful for debugging registry coverage: every coin is shown, the
    /// unrecognized ones with the fallback scale applied.
    ///
    /// ```rust
    /// use coinscale::ResolverConfig;
    ///
    /// let config = ResolverConfig::minimal();
    /// assert!(config.keep_unrecognized);
    /// assert!(!config.skip_pool_shares);
    /// ```
    pub fn minimal() -> Self {
        Self {
            fallback_exponent: DEFAULT_FALLBACK_EXPONENT,
            keep_unrecognized: true,
            skip_pool_shares: false,
        }
    }
}

/// Builder for [`ResolverConfig`]
///
/// # Example
///
/// ```rust
/// use coinscale::ResolverConfigBuilder;
///
/// let config = ResolverConfigBuilder::with_defaults()
///     .fallback_exponent(8)
///     .build();
/// assert!(config.skip_pool_shares);
/// ```
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfigBuilder {
    /// Create a new builder starting from [`ResolverConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::minimal(),
        }
    }

    /// Start with common defaults
    pub fn with_defaults() -> Self {
        Self {
            config: ResolverConfig::with_common_defaults(),
        }
    }

    /// Set the exponent used for coins no registry knows
    pub fn fallback_exponent(mut self, exponent: u32) -> Self {
        self.config.fallback_exponent = exponent;
        self
    }

    /// Keep or drop fallback-scaled coins in balance lists
    pub fn keep_unrecognized(mut self, keep: bool) -> Self {
        self.config.keep_unrecognized = keep;
        self
    }

    /// Skip or keep pool shares in balance lists
    pub fn skip_pool_shares(mut self, skip: bool) -> Self {
        self.config.skip_pool_shares = skip;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}
