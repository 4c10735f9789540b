// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome surface that normalizes the five signals onto one callback.
//!
//! `CallbackOutcome` is built fresh for every dispatch. Four of the five
//! signals collapse into a [`Completion`] handed to the stored callback;
//! redirect writes to the response sink instead and the callback never
//! fires on that path.

use serde_json::Value;
use tracing::{debug, error};

use warden_core::{
    BoxError, Completion, CompletionCallback, Outcome, OutcomeKind, ResponseSink, WardenError,
    DEFAULT_REDIRECT_STATUS,
};

/// Per-attempt outcome surface over a completion callback and response sink.
///
/// Signal methods consume the surface, so an attempt cannot resolve twice.
/// Completion delivery is pushed onto the executor: the callback never runs
/// inside the call stack of the signal that triggered it, even when the
/// strategy signals before its verification future first yields.
pub struct CallbackOutcome<U> {
    strategy: String,
    callback: CompletionCallback<U>,
    sink: Box<dyn ResponseSink>,
}

impl<U: Send + 'static> CallbackOutcome<U> {
    /// Builds a surface for one attempt. `strategy` is used as a log field.
    pub fn new(
        strategy: impl Into<String>,
        callback: CompletionCallback<U>,
        sink: Box<dyn ResponseSink>,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            callback,
            sink,
        }
    }

    fn deliver(self, completion: Completion<U>) {
        debug!(
            strategy = %self.strategy,
            outcome = %completion.kind(),
            "authentication attempt resolved"
        );
        let callback = self.callback;
        // Delivery happens on a later executor turn, never inline.
        tokio::spawn(async move { callback(completion) });
    }

    fn write_redirect(&mut self, url: &str, status: u16) -> Result<(), WardenError> {
        self.sink.set_status(status)?;
        self.sink.set_header("Location", url)?;
        self.sink.set_header("Content-Length", "0")?;
        self.sink.finalize()
    }
}

impl<U: Send + 'static> Outcome<U> for CallbackOutcome<U> {
    fn success(self: Box<Self>, user: U, info: Option<Value>) {
        self.deliver(Completion::success(user, info));
    }

    fn error(self: Box<Self>, err: BoxError) {
        self.deliver(Completion::error(err));
    }

    fn fail(self: Box<Self>, info: Option<Value>, status: Option<u16>) {
        let (info, status) = normalize_fail_args(info, status);
        self.deliver(Completion::failure(info, status));
    }

    fn pass(self: Box<Self>) {
        self.deliver(Completion::pass());
    }

    fn redirect(mut self: Box<Self>, url: &str, status: Option<u16>) {
        let status = status.unwrap_or(DEFAULT_REDIRECT_STATUS);
        debug!(
            strategy = %self.strategy,
            outcome = %OutcomeKind::Redirect,
            status,
            "redirecting authentication attempt"
        );
        if let Err(err) = self.write_redirect(url, status) {
            error!(strategy = %self.strategy, %err, "response sink rejected redirect write");
        }
    }
}

/// Resolves the shape-overloaded failure arguments.
///
/// A JSON number in the `info` slot claims the `status` slot and leaves
/// `info` absent, even when an explicit status was supplied. Numbers that
/// cannot be a status (fractional, negative, out of `u16` range) stay in
/// the `info` slot untouched.
pub(crate) fn normalize_fail_args(
    info: Option<Value>,
    status: Option<u16>,
) -> (Option<Value>, Option<u16>) {
    match info {
        Some(Value::Number(ref n)) => match n.as_u64().and_then(|v| u16::try_from(v).ok()) {
            Some(code) => (None, Some(code)),
            None => (info, status),
        },
        other => (other, status),
    }
}
