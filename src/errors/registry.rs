// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading asset registries.

use std::path::PathBuf;

/// Errors that can occur while loading registry data at startup.
///
/// Structural oddities inside a well-formed registry (missing display unit,
/// duplicated base denom) are logged, not returned, because the conversion
/// engine degrades gracefully around them.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("Failed to read registry file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The registry data is not valid chain-registry JSON.
    #[error("Failed to parse registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// Create an `Io` error for a specific path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}
