// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion-capture helper for dispatch tests.

use tokio::sync::mpsc;

use warden_core::Completion;

/// Returns a completion callback plus a receiver capturing what it delivers.
///
/// The channel is unbounded so a test can distinguish "delivered once" from
/// "never delivered": await the first message, then check `try_recv` for
/// emptiness. The sender drops with the callback, so a resolved attempt
/// leaves the channel disconnected rather than merely empty.
pub fn completion_channel<U: Send + 'static>() -> (
    impl FnOnce(Completion<U>) + Send + 'static,
    mpsc::UnboundedReceiver<Completion<U>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback = move |completion| {
        let _ = tx.send(completion);
    };
    (callback, rx)
}
