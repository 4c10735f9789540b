// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome-dispatch engine for Warden authentication strategies.
//!
//! The engine adapts any [`warden_core::Strategy`] to a single uniform
//! completion callback: [`authenticate`] builds a per-attempt outcome
//! surface, hands it to the strategy's verification step, and guarantees
//! the callback fires exactly once, on a later executor turn, whichever
//! outcome path the strategy takes. [`StrategyRegistry`] adds dispatch by
//! installed name on top.

pub mod dispatch;
pub mod outcome;
pub mod registry;

pub use dispatch::authenticate;
pub use outcome::CallbackOutcome;
pub use registry::StrategyRegistry;
