// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome surface handed to a strategy for one authentication attempt.

use serde_json::Value;

use crate::types::BoxError;

/// The five ways a strategy may resolve an authentication attempt.
///
/// A fresh surface is built per dispatch and handed to the strategy's
/// verification step. Every signal consumes the surface, so resolving an
/// attempt twice does not compile. Dropping the surface without invoking a
/// signal leaves the attempt unresolved forever; no timeout fires.
pub trait Outcome<U>: Send {
    /// Authentication succeeded with a verified `user`.
    fn success(self: Box<Self>, user: U, info: Option<Value>);

    /// Verification itself broke (storage down, malformed response, ...).
    /// `err` reaches the caller verbatim.
    fn error(self: Box<Self>, err: BoxError);

    /// Authentication was attempted and refused. A JSON number in the
    /// `info` slot is reinterpreted as the `status`, leaving `info` absent.
    fn fail(self: Box<Self>, info: Option<Value>, status: Option<u16>);

    /// The strategy declines to make a determination.
    fn pass(self: Box<Self>);

    /// Resolve by redirecting the client instead of completing the
    /// attempt: the completion callback does not fire on this path.
    /// `status` defaults to [`crate::types::DEFAULT_REDIRECT_STATUS`].
    fn redirect(self: Box<Self>, url: &str, status: Option<u16>);
}

/// Owned outcome surface as passed to [`crate::traits::Strategy::authenticate`].
pub type OutcomeHandle<U> = Box<dyn Outcome<U>>;
