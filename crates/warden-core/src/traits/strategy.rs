// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy trait implemented by each authentication scheme.

use async_trait::async_trait;
use serde_json::Value;

use crate::traits::outcome::OutcomeHandle;

/// A pluggable verification scheme (credential check, token check,
/// federated redirect, ...).
///
/// Implementations are shared behind `Arc` and only ever borrowed, so one
/// strategy value safely serves concurrent authentication attempts.
///
/// `R` is the caller's request context, passed through untouched; `U` is
/// the verified-user type the strategy produces.
#[async_trait]
pub trait Strategy<R, U>: Send + Sync {
    /// Name under which this strategy registers and logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Verifies the request and resolves `outcome` with exactly one signal,
    /// either before returning or after deferred work of its own.
    ///
    /// Dropping `outcome` without signaling leaves the attempt unresolved:
    /// the completion callback never fires and nothing times out. That is a
    /// contract violation on the implementation's side, not a recoverable
    /// condition the dispatcher reports.
    async fn authenticate(&self, request: &R, options: Option<&Value>, outcome: OutcomeHandle<U>);
}
