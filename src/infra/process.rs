//! Backend process control — spawn, liveness, termination, exec handoff.

use std::convert::Infallible;

use anyhow::{Context, Result};

use crate::application::ports::BackendChild;
use crate::domain::CommandSpec;

// ── Spawning ─────────────────────────────────────────────────────────────────

/// The spawned backend, implementing the `BackendChild` port.
///
/// `kill_on_drop(true)` is set as a safety net: if the launcher unwinds
/// without reaching an explicit `terminate`, the OS process does not
/// outlive the handle. A successful exec handoff never drops the handle,
/// so the backend survives it.
pub struct SpawnedBackend {
    child: tokio::process::Child,
}

/// Spawn the backend with inherited environment and stdio.
///
/// Backend logs flow to the launcher's own stdout/stderr, which is where
/// operators expect them during startup.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned.
pub fn spawn_backend(spec: &CommandSpec) -> Result<SpawnedBackend> {
    let child = tokio::process::Command::new(&spec.program)
        .args(&spec.args)
        .stdin(std::process::Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to spawn vLLM backend: {}", spec.display_line()))?;
    Ok(SpawnedBackend { child })
}

impl BackendChild for SpawnedBackend {
    fn poll_exit(&mut self) -> Option<String> {
        match self.child.try_wait() {
            Ok(Some(status)) => Some(status.to_string()),
            // A failed query says nothing about the process; count it as alive.
            Ok(None) | Err(_) => None,
        }
    }

    async fn terminate(&mut self) {
        let _ = self.child.kill().await;
    }

    fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

// ── Handoff ──────────────────────────────────────────────────────────────────

/// Replace the current process image with the API server.
///
/// On success this never returns: the launcher's PID becomes the API
/// server's, and the backend child keeps running under the new image.
///
/// # Errors
///
/// Returns an error only if `exec(2)` itself fails (e.g. the program does
/// not exist).
#[cfg(unix)]
pub fn exec_api_server(spec: &CommandSpec) -> Result<Infallible> {
    use std::os::unix::process::CommandExt;

    let err = std::process::Command::new(&spec.program)
        .args(&spec.args)
        .exec();
    Err(err).with_context(|| format!("failed to exec API server: {}", spec.display_line()))
}

/// exec(2) is unavailable here: run the API server as a final child, wait,
/// and forward its exit status as our own. The launcher still ceases to be
/// a distinct entity from the caller's point of view.
#[cfg(not(unix))]
pub fn exec_api_server(spec: &CommandSpec) -> Result<Infallible> {
    let status = std::process::Command::new(&spec.program)
        .args(&spec.args)
        .status()
        .with_context(|| format!("failed to run API server: {}", spec.display_line()))?;
    std::process::exit(status.code().unwrap_or(1));
}

// ── Signals ──────────────────────────────────────────────────────────────────

/// Wait for an interrupt or termination signal.
///
/// Returns the conventional `128 + signo` exit code for the signal that
/// fired, so an external supervisor sees the same status a signal-default
/// death would have produced.
#[cfg(unix)]
pub async fn shutdown_signal() -> i32 {
    use tokio::signal::unix::{SignalKind, signal};

    let sigterm = signal(SignalKind::terminate());
    match sigterm {
        Ok(mut term) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => 130,
                _ = term.recv() => 143,
            }
        }
        // SIGTERM registration failing is effectively unheard of; fall
        // back to ctrl-c so the launcher still cleans up on interrupt.
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
            130
        }
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() -> i32 {
    let _ = tokio::signal::ctrl_c().await;
    130
}
