//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use crate::domain::ProbeOutcome;

// ── Backend process port ──────────────────────────────────────────────────────

/// Handle to the spawned backend process.
///
/// There is at most one live handle at a time: the launcher never spawns a
/// second backend before the first has been reaped.
#[allow(async_fn_in_trait)]
pub trait BackendChild {
    /// Non-blocking liveness check.
    ///
    /// Returns a human-readable exit status if the process has terminated,
    /// `None` while it is still running.
    fn poll_exit(&mut self) -> Option<String>;

    /// Best-effort termination. Errors are swallowed; the process may
    /// already be gone.
    async fn terminate(&mut self);

    /// OS process id, if the handle is still attached.
    fn id(&self) -> Option<u32>;
}

// ── Readiness probe port ──────────────────────────────────────────────────────

/// One-shot HTTP readiness probe against the backend.
#[allow(async_fn_in_trait)]
pub trait ReadinessProbe {
    /// Issue a single probe. Never fails: every transport or protocol
    /// error maps to `ProbeOutcome::NotReady`.
    async fn probe(&self) -> ProbeOutcome;
}
