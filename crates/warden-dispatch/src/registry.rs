// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of installed authentication strategies.
//!
//! The `StrategyRegistry` stores strategies behind `Arc` keyed by name,
//! supporting registration, lookup, removal, and dispatch by name.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use warden_core::{Completion, ResponseSink, Strategy, WardenError};

use crate::dispatch::authenticate;

/// Named set of installed strategies.
///
/// Strategies are only ever borrowed, so one registry safely serves
/// concurrent dispatches behind the caller's own synchronization.
pub struct StrategyRegistry<R, U> {
    entries: HashMap<String, Arc<dyn Strategy<R, U>>>,
}

impl<R, U> StrategyRegistry<R, U>
where
    R: Send + Sync + 'static,
    U: Send + 'static,
{
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a strategy under its own [`Strategy::name`].
    pub fn register(&mut self, strategy: Arc<dyn Strategy<R, U>>) {
        let name = strategy.name().to_string();
        self.entries.insert(name, strategy);
    }

    /// Register a strategy under an explicit name, overriding
    /// [`Strategy::name`].
    pub fn register_as(&mut self, name: impl Into<String>, strategy: Arc<dyn Strategy<R, U>>) {
        self.entries.insert(name.into(), strategy);
    }

    /// Remove a strategy, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Strategy<R, U>>> {
        self.entries.remove(name)
    }

    /// Get a registered strategy by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Strategy<R, U>>> {
        self.entries.get(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispatches an attempt against the strategy registered under `name`.
    ///
    /// Behaves exactly like [`authenticate`] once the strategy is resolved;
    /// unknown names are reported before anything is dispatched.
    pub fn authenticate<C>(
        &self,
        name: &str,
        request: R,
        sink: Box<dyn ResponseSink>,
        options: Option<Value>,
        callback: C,
    ) -> Result<(), WardenError>
    where
        C: FnOnce(Completion<U>) + Send + 'static,
    {
        let strategy = self
            .entries
            .get(name)
            .ok_or_else(|| WardenError::StrategyNotFound {
                name: name.to_string(),
            })?;
        authenticate(request, sink, Arc::clone(strategy), options, callback);
        Ok(())
    }
}

impl<R, U> Default for StrategyRegistry<R, U>
where
    R: Send + Sync + 'static,
    U: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use warden_test_utils::{Script, ScriptedStrategy, TestUser};

    fn scripted(name: &str) -> Arc<dyn Strategy<Value, TestUser>> {
        Arc::new(ScriptedStrategy::named(name, Script::Pass))
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = StrategyRegistry::new();
        registry.register(scripted("token"));

        let entry = registry.get("token").expect("registered strategy");
        assert_eq!(entry.name(), "token");
    }

    #[test]
    fn register_as_overrides_strategy_name() {
        let mut registry = StrategyRegistry::new();
        registry.register_as("session", scripted("token"));

        assert!(registry.get("session").is_some());
        assert!(registry.get("token").is_none());
    }

    #[test]
    fn unregister_removes_entry() {
        let mut registry = StrategyRegistry::new();
        registry.register(scripted("token"));

        assert!(registry.unregister("token").is_some());
        assert!(registry.get("token").is_none());
        assert!(registry.unregister("token").is_none());
    }

    #[test]
    fn names_returns_sorted() {
        let mut registry = StrategyRegistry::new();
        registry.register(scripted("zebra"));
        registry.register(scripted("alpha"));
        registry.register(scripted("middle"));

        assert_eq!(registry.names(), vec!["alpha", "middle", "zebra"]);
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(scripted("token"));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reregistering_replaces_entry() {
        let mut registry = StrategyRegistry::new();
        registry.register(scripted("token"));
        registry.register(scripted("token"));
        assert_eq!(registry.len(), 1);
    }
}
