// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for coinscale operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: &str) -> Result<T> {
//!     let span = spans::my_operation(param);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for resolving the display form of a single coin.
///
/// Parent: display_balances span, or none when called directly
#[inline]
pub(crate) fn resolve_display_coin(denom: &str) -> Span {
    tracing::trace_span!("coinscale.resolve_display_coin", denom = %denom)
}

/// Create span for converting a list of raw balances for display.
///
/// Parent: None (root span for this operation)
/// Children: resolve_display_coin spans (one per balance)
#[inline]
pub(crate) fn display_balances(balance_count: usize, chain_name: &str) -> Span {
    tracing::debug_span!(
        "coinscale.display_balances",
        balance_count = balance_count,
        chain_name = %chain_name,
    )
}

/// Create span for loading registry data.
#[inline]
pub(crate) fn load_registry(source: &str) -> Span {
    tracing::debug_span!("coinscale.load_registry", source = %source)
}
