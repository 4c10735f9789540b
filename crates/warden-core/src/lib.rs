// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Warden strategy-dispatch layer.
//!
//! This crate provides the foundational trait definitions, outcome types,
//! and error types shared by the dispatch engine and by strategy
//! implementations. It carries no dispatch logic of its own.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::WardenError;
pub use types::{
    AuthUser, BoxError, Completion, CompletionCallback, OutcomeKind, DEFAULT_REDIRECT_STATUS,
};

// Re-export all traits at crate root.
pub use traits::{Outcome, OutcomeHandle, ResponseSink, Strategy};
