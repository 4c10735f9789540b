// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response sink trait, written to only by the redirect outcome.

use crate::error::WardenError;

/// Mutable handle over an in-flight HTTP response.
///
/// The caller owns the sink and moves it into the dispatcher for the
/// duration of one attempt. Only the redirect outcome writes to it; every
/// other outcome drops it untouched. It is never retained past `finalize`.
pub trait ResponseSink: Send {
    /// Sets the response status code.
    fn set_status(&mut self, code: u16) -> Result<(), WardenError>;

    /// Sets a response header. At least `Location` and `Content-Length`
    /// must be accepted.
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), WardenError>;

    /// Flushes and completes the response. Must succeed at most once.
    fn finalize(&mut self) -> Result<(), WardenError>;
}
