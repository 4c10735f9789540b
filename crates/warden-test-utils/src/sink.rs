// SPDX-FileCopyrightText: 2026 Warden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock response sinks for redirect-outcome tests.
//!
//! `RecordingSink` captures status, headers, and finalization for assertion
//! after the sink has moved into a dispatch; `FailingSink` rejects every
//! write, for exercising the dispatcher's sink-error logging.

use std::sync::{Arc, Mutex};

use warden_core::{ResponseSink, WardenError};

/// Everything a [`RecordingSink`] observed.
#[derive(Debug, Default, Clone)]
pub struct SinkState {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub finalize_count: usize,
}

/// Response sink that records writes for assertion.
pub struct RecordingSink {
    state: Arc<Mutex<SinkState>>,
}

impl RecordingSink {
    /// Create a new sink with empty state.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState::default())),
        }
    }

    /// Assertion handle that stays usable after the sink moves into a
    /// dispatch.
    pub fn handle(&self) -> SinkHandle {
        SinkHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for RecordingSink {
    fn set_status(&mut self, code: u16) -> Result<(), WardenError> {
        self.state.lock().expect("sink state poisoned").status = Some(code);
        Ok(())
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), WardenError> {
        self.state
            .lock()
            .expect("sink state poisoned")
            .headers
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), WardenError> {
        let mut state = self.state.lock().expect("sink state poisoned");
        if state.finalize_count > 0 {
            return Err(WardenError::AlreadyFinalized);
        }
        state.finalize_count += 1;
        Ok(())
    }
}

/// Shared view over a [`RecordingSink`]'s captured state.
#[derive(Clone)]
pub struct SinkHandle {
    state: Arc<Mutex<SinkState>>,
}

impl SinkHandle {
    /// The recorded status code, if one was set.
    pub fn status(&self) -> Option<u16> {
        self.state.lock().expect("sink state poisoned").status
    }

    /// The last value recorded for `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .expect("sink state poisoned")
            .headers
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    /// True once the response has been finalized.
    pub fn finalized(&self) -> bool {
        self.finalize_count() > 0
    }

    /// How many times finalize succeeded.
    pub fn finalize_count(&self) -> usize {
        self.state.lock().expect("sink state poisoned").finalize_count
    }
}

/// Response sink whose every operation fails, as a closed stream would.
pub struct FailingSink;

impl ResponseSink for FailingSink {
    fn set_status(&mut self, _code: u16) -> Result<(), WardenError> {
        Err(WardenError::Sink {
            source: "sink closed".into(),
        })
    }

    fn set_header(&mut self, _name: &str, _value: &str) -> Result<(), WardenError> {
        Err(WardenError::Sink {
            source: "sink closed".into(),
        })
    }

    fn finalize(&mut self) -> Result<(), WardenError> {
        Err(WardenError::Sink {
            source: "sink closed".into(),
        })
    }
}
