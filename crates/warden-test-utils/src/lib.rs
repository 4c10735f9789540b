// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Warden integration tests.
//!
//! Provides mock strategies, mock response sinks, and completion-capture
//! infrastructure for fast, deterministic, CI-runnable tests without real
//! verification schemes or HTTP transports.
//!
//! # Components
//!
//! - [`ScriptedStrategy`] - Mock strategy firing a pre-configured outcome signal
//! - [`RecordingSink`] / [`FailingSink`] - Mock response sinks for redirect tests
//! - [`completion_channel`] - Captures completions for assertion

pub mod completion;
pub mod scripted;
pub mod sink;

pub use completion::completion_channel;
pub use scripted::{Script, ScriptError, ScriptedStrategy, TestUser};
pub use sink::{FailingSink, RecordingSink, SinkHandle, SinkState};
