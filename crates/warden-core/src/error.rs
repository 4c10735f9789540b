// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Warden strategy-dispatch layer.

use thiserror::Error;

/// The primary error type for Warden's own fallible operations.
///
/// Errors reported by a strategy through its outcome surface are *not*
/// represented here: they travel verbatim as the boxed error inside a
/// [`crate::types::Completion`], never wrapped or reinterpreted.
#[derive(Debug, Error)]
pub enum WardenError {
    /// The response sink rejected a write (closed stream, transport failure).
    #[error("response sink error: {source}")]
    Sink {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Finalize was invoked on a response that was already finalized.
    #[error("response already finalized")]
    AlreadyFinalized,

    /// Requested strategy was not found in the registry.
    #[error("strategy not found: {name}")]
    StrategyNotFound { name: String },
}
