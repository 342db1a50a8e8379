//! Shared canned port implementations for unit tests.
//!
//! Each test file scripts its children and probes from these instead of
//! re-defining the same boilerplate.

#![allow(dead_code)]

use std::cell::Cell;

use ocr_launcher::application::ports::{BackendChild, ReadinessProbe};
use ocr_launcher::domain::{ProbeOutcome, classify_status};

// ── Backend children ─────────────────────────────────────────────────────────

/// Child that stays alive for the whole test.
#[derive(Default)]
pub struct ChildStaysAlive {
    pub polls: u32,
    pub terminated: bool,
}

impl BackendChild for ChildStaysAlive {
    fn poll_exit(&mut self) -> Option<String> {
        self.polls += 1;
        None
    }

    async fn terminate(&mut self) {
        self.terminated = true;
    }

    fn id(&self) -> Option<u32> {
        Some(4242)
    }
}

/// Child whose `n`-th liveness check reports it has exited.
pub struct ChildExitsOnPoll {
    exit_on: u32,
    status: &'static str,
    pub polls: u32,
}

impl ChildExitsOnPoll {
    pub fn new(exit_on: u32, status: &'static str) -> Self {
        Self {
            exit_on,
            status,
            polls: 0,
        }
    }
}

impl BackendChild for ChildExitsOnPoll {
    fn poll_exit(&mut self) -> Option<String> {
        self.polls += 1;
        (self.polls >= self.exit_on).then(|| self.status.to_string())
    }

    async fn terminate(&mut self) {}

    fn id(&self) -> Option<u32> {
        Some(4242)
    }
}

// ── Probes ───────────────────────────────────────────────────────────────────

/// Probe answering a fixed sequence of HTTP statuses, repeating the last.
pub struct ScriptedProbe {
    statuses: Vec<u16>,
    calls: Cell<u32>,
}

impl ScriptedProbe {
    pub fn new(statuses: &[u16]) -> Self {
        Self {
            statuses: statuses.to_vec(),
            calls: Cell::new(0),
        }
    }

    /// Number of probes issued so far.
    pub fn count(&self) -> u32 {
        self.calls.get()
    }
}

impl ReadinessProbe for ScriptedProbe {
    async fn probe(&self) -> ProbeOutcome {
        let i = self.calls.get();
        self.calls.set(i + 1);
        let status = self
            .statuses
            .get(i as usize)
            .or(self.statuses.last())
            .copied()
            .unwrap_or(503);
        classify_status(status)
    }
}

/// Probe whose target never accepts a connection.
pub struct ProbeConnectionRefused {
    calls: Cell<u32>,
}

impl ProbeConnectionRefused {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    pub fn count(&self) -> u32 {
        self.calls.get()
    }
}

impl ReadinessProbe for ProbeConnectionRefused {
    async fn probe(&self) -> ProbeOutcome {
        self.calls.set(self.calls.get() + 1);
        ProbeOutcome::NotReady {
            reason: "probe error: connection refused".to_string(),
        }
    }
}
