// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Warden dispatch architecture.
//!
//! [`Strategy`] uses `#[async_trait]` for dynamic dispatch compatibility;
//! [`Outcome`] is the per-attempt capability surface handed to a strategy.

pub mod outcome;
pub mod sink;
pub mod strategy;

// Re-export all traits at the traits module level for convenience.
pub use outcome::{Outcome, OutcomeHandle};
pub use sink::ResponseSink;
pub use strategy::Strategy;
