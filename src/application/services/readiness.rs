//! Readiness supervision — poll the backend until it answers or fails.
//!
//! The caller spawns the backend strictly before the first probe and
//! hands off strictly after a probe observed success. One iteration per
//! wall-clock second, liveness before probe, no retries beyond that
//! cadence.

use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::{BackendChild, ReadinessProbe};
use crate::domain::{LaunchError, ProbeOutcome};

/// Pause between poll iterations.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll until the backend answers 2xx, exits, or the deadline passes.
///
/// Each iteration checks liveness before probing, so a dead backend fails
/// fast instead of burning the rest of the timeout. The most recent probe
/// failure reason is carried into the timeout error.
///
/// # Errors
///
/// - [`LaunchError::BackendExited`] if the child terminates before ever
///   answering 2xx.
/// - [`LaunchError::StartupTimeout`] if the deadline elapses first.
pub async fn wait_ready(
    child: &mut impl BackendChild,
    probe: &impl ReadinessProbe,
    timeout: Duration,
) -> Result<(), LaunchError> {
    let started = Instant::now();
    let deadline = started + timeout;
    let mut last_probe: Option<String> = None;

    while Instant::now() < deadline {
        if let Some(status) = child.poll_exit() {
            return Err(LaunchError::BackendExited { status });
        }

        match probe.probe().await {
            ProbeOutcome::Ready => return Ok(()),
            ProbeOutcome::NotReady { reason } => last_probe = Some(reason),
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }

    Err(LaunchError::StartupTimeout {
        waited_secs: started.elapsed().as_secs(),
        last_probe: last_probe.unwrap_or_else(|| "no probe completed".to_string()),
    })
}
