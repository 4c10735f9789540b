// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock strategy that fires a pre-configured outcome signal.
//!
//! `ScriptedStrategy` implements `Strategy` with an injectable [`Script`]
//! and a call counter, enabling fast, deterministic dispatch tests without
//! real verification schemes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use warden_core::{OutcomeHandle, Strategy};

/// User record produced by test strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUser {
    pub id: String,
    pub username: String,
}

impl TestUser {
    pub fn new(id: &str, username: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
        }
    }
}

/// Error type fired by [`Script::Error`], concrete so tests can downcast
/// the boxed error a completion carries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ScriptError(pub String);

/// The outcome signal a [`ScriptedStrategy`] fires when invoked.
#[derive(Debug, Clone)]
pub enum Script {
    /// Succeed with the given user and info.
    Success {
        user: TestUser,
        info: Option<Value>,
    },
    /// Succeed with the given user, echoing the received options back as
    /// the info value. Lets tests observe exactly what the strategy saw.
    EchoOptions { user: TestUser },
    /// Report a verification error.
    Error { message: String },
    /// Refuse authentication.
    Fail {
        info: Option<Value>,
        status: Option<u16>,
    },
    /// Decline to make a determination.
    Pass,
    /// Redirect the client.
    Redirect { url: String, status: Option<u16> },
}

/// Strategy that fires one pre-configured outcome signal per invocation.
///
/// An optional delay before signaling simulates strategies that defer
/// their outcome behind network round-trips.
pub struct ScriptedStrategy {
    name: String,
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedStrategy {
    /// Create a scripted strategy named `"scripted"`.
    pub fn new(script: Script) -> Self {
        Self::named("scripted", script)
    }

    /// Create a scripted strategy with an explicit name.
    pub fn named(name: &str, script: Script) -> Self {
        Self {
            name: name.to_string(),
            script,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep for `delay` before firing the signal.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `authenticate` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Strategy<Value, TestUser> for ScriptedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    async fn authenticate(
        &self,
        _request: &Value,
        options: Option<&Value>,
        outcome: OutcomeHandle<TestUser>,
    ) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.script {
            Script::Success { user, info } => outcome.success(user.clone(), info.clone()),
            Script::EchoOptions { user } => outcome.success(user.clone(), options.cloned()),
            Script::Error { message } => outcome.error(Box::new(ScriptError(message.clone()))),
            Script::Fail { info, status } => outcome.fail(info.clone(), *status),
            Script::Pass => outcome.pass(),
            Script::Redirect { url, status } => outcome.redirect(url, *status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_count_starts_at_zero() {
        let strategy = ScriptedStrategy::new(Script::Pass);
        assert_eq!(strategy.call_count(), 0);
    }

    #[test]
    fn named_overrides_default_name() {
        let strategy = ScriptedStrategy::named("bearer", Script::Pass);
        assert_eq!(strategy.name(), "bearer");
    }

    #[test]
    fn script_error_downcasts_from_boxed() {
        let boxed: warden_core::BoxError = Box::new(ScriptError("bad token".into()));
        let err = boxed.downcast_ref::<ScriptError>().expect("concrete type");
        assert_eq!(err.0, "bad token");
    }
}
