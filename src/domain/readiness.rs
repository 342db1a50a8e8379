//! Readiness classification — pure mapping from probe observations.
//!
//! Probe-level failures (connection refused, timeouts, bad responses) are
//! data here, not errors: they all collapse into `NotReady` and the poll
//! loop keeps going.

// ── Types ────────────────────────────────────────────────────────────────────

/// Endpoint polled on the backend to decide readiness.
pub const READINESS_PATH: &str = "/v1/models";

/// Outcome of a single readiness probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The backend answered with a success status.
    Ready,
    /// Anything else: non-2xx status, connection error, or timeout.
    NotReady { reason: String },
}

impl ProbeOutcome {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// The failure reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ready => None,
            Self::NotReady { reason } => Some(reason),
        }
    }
}

// ── Pure functions ───────────────────────────────────────────────────────────

/// Classify an HTTP status code: 200–299 means ready, everything else does
/// not. A 404 or 503 is treated exactly like a refused connection — one
/// failed probe, never a fatal error.
#[must_use]
pub fn classify_status(status: u16) -> ProbeOutcome {
    if (200..=299).contains(&status) {
        ProbeOutcome::Ready
    } else {
        ProbeOutcome::NotReady {
            reason: format!("HTTP {status}"),
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
