// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the dispatch engine and strategy implementations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque error reported by a strategy, forwarded to the caller as-is.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status used for a redirect outcome when the strategy does not supply one.
pub const DEFAULT_REDIRECT_STATUS: u16 = 302;

/// Identifies which outcome signal resolved an authentication attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum OutcomeKind {
    Success,
    Error,
    Fail,
    Pass,
    Redirect,
}

/// The user slot of a completion.
///
/// Mirrors the three things an attempt can say about the user: a verified
/// identity, an explicit refusal, or no determination at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthUser<U> {
    /// A verified user from a successful authentication.
    User(U),
    /// Authentication was attempted and refused.
    Refused,
    /// No determination was made (pass and error outcomes).
    Undetermined,
}

impl<U> AuthUser<U> {
    /// The verified user, if this attempt produced one.
    pub fn user(&self) -> Option<&U> {
        match self {
            AuthUser::User(user) => Some(user),
            _ => None,
        }
    }

    /// Consumes the slot, yielding the verified user if present.
    pub fn into_user(self) -> Option<U> {
        match self {
            AuthUser::User(user) => Some(user),
            _ => None,
        }
    }

    /// True when the attempt explicitly refused authentication.
    pub fn is_refused(&self) -> bool {
        matches!(self, AuthUser::Refused)
    }

    /// True when the attempt made no determination.
    pub fn is_undetermined(&self) -> bool {
        matches!(self, AuthUser::Undetermined)
    }
}

/// The canonical result of one authentication attempt.
///
/// Every completion carries all four positions; a position a strategy did
/// not supply is `None`, never a narrower record. Redirect outcomes resolve
/// through the response sink instead and never produce a `Completion`.
#[derive(Debug)]
pub struct Completion<U> {
    /// Error reported by the strategy, verbatim.
    pub error: Option<BoxError>,
    /// The user slot: verified identity, refusal, or no determination.
    pub user: AuthUser<U>,
    /// Additional detail supplied by the strategy (reason, message, ...).
    pub info: Option<serde_json::Value>,
    /// HTTP status suggested by a failing strategy.
    pub status: Option<u16>,
}

impl<U> Completion<U> {
    /// Completion for a verified user.
    pub fn success(user: U, info: Option<serde_json::Value>) -> Self {
        Self {
            error: None,
            user: AuthUser::User(user),
            info,
            status: None,
        }
    }

    /// Completion carrying a strategy-reported error.
    pub fn error(err: impl Into<BoxError>) -> Self {
        Self {
            error: Some(err.into()),
            user: AuthUser::Undetermined,
            info: None,
            status: None,
        }
    }

    /// Completion for a refused authentication.
    pub fn failure(info: Option<serde_json::Value>, status: Option<u16>) -> Self {
        Self {
            error: None,
            user: AuthUser::Refused,
            info,
            status,
        }
    }

    /// Completion for an attempt that made no determination.
    pub fn pass() -> Self {
        Self {
            error: None,
            user: AuthUser::Undetermined,
            info: None,
            status: None,
        }
    }

    /// Which outcome signal produced this completion.
    pub fn kind(&self) -> OutcomeKind {
        if self.error.is_some() {
            return OutcomeKind::Error;
        }
        match self.user {
            AuthUser::User(_) => OutcomeKind::Success,
            AuthUser::Refused => OutcomeKind::Fail,
            AuthUser::Undetermined => OutcomeKind::Pass,
        }
    }
}

/// Boxed completion callback stored by the outcome surface.
pub type CompletionCallback<U> = Box<dyn FnOnce(Completion<U>) + Send + 'static>;
