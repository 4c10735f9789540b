// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch entry point: one call, one attempt, one completion.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use warden_core::{Completion, ResponseSink, Strategy};

use crate::outcome::CallbackOutcome;

/// Dispatches one authentication attempt against `strategy`.
///
/// A fresh outcome surface is built over `callback` and `sink`, the
/// strategy's verification future is spawned onto the executor, and the
/// call returns without waiting for it. Whether verification completes
/// synchronously or after deferred work of its own is the strategy's
/// decision; either way the completion callback fires at most once, on a
/// later executor turn. The redirect outcome resolves through `sink`
/// instead and the callback does not fire.
///
/// `options` is forwarded to the strategy verbatim; `None` is what the
/// strategy observes when the caller has no configuration to pass.
///
/// Must be called from within a tokio runtime. There is no cancellation:
/// once dispatched, an attempt runs until the strategy resolves it.
pub fn authenticate<R, U, S, C>(
    request: R,
    sink: Box<dyn ResponseSink>,
    strategy: Arc<S>,
    options: Option<Value>,
    callback: C,
) where
    R: Send + Sync + 'static,
    U: Send + 'static,
    S: Strategy<R, U> + ?Sized + 'static,
    C: FnOnce(Completion<U>) + Send + 'static,
{
    let outcome = CallbackOutcome::new(strategy.name(), Box::new(callback), sink);
    debug!(strategy = strategy.name(), "dispatching authentication attempt");
    tokio::spawn(async move {
        strategy
            .authenticate(&request, options.as_ref(), Box::new(outcome))
            .await;
    });
}
