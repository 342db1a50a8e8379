//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator at the command layer.

use thiserror::Error;

// ── Launch errors ─────────────────────────────────────────────────────────────

/// Errors that terminate the launcher before handoff.
///
/// Both variants map to the same process exit code (1): external
/// supervisors restart on any non-zero status, and splitting the codes
/// would change that contract.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("vLLM backend exited before becoming ready ({status}). Check the backend logs above.")]
    BackendExited { status: String },

    #[error(
        "timed out after {waited_secs}s waiting for the vLLM backend (last probe: {last_probe}).\nIncrease OCR_VLLM_STARTUP_TIMEOUT_SECONDS if the model needs longer to load."
    )]
    StartupTimeout { waited_secs: u64, last_probe: String },
}

// ── Command-line errors ───────────────────────────────────────────────────────

/// Errors from parsing a backend or API server command line.
#[derive(Debug, Error)]
pub enum CommandLineError {
    #[error("command line is empty")]
    Empty,
}
