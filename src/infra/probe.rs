//! HTTP readiness probe against the local vLLM backend.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::ReadinessProbe;
use crate::domain::readiness::{self, ProbeOutcome, READINESS_PATH};

/// Per-request probe timeout. A backend still loading weights simply does
/// not answer; two seconds keeps the poll cadence close to one iteration
/// per second.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probes `GET http://127.0.0.1:<port>/v1/models`.
pub struct HttpReadinessProbe {
    url: String,
    client: reqwest::Client,
}

impl HttpReadinessProbe {
    /// Build a probe for the given backend port with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(port: u16) -> Result<Self> {
        Self::with_timeout(port, PROBE_TIMEOUT)
    }

    /// Build a probe with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(port: u16, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building probe HTTP client")?;
        Ok(Self {
            url: format!("http://127.0.0.1:{port}{READINESS_PATH}"),
            client,
        })
    }

    /// The URL this probe targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReadinessProbe for HttpReadinessProbe {
    async fn probe(&self) -> ProbeOutcome {
        match self.client.get(&self.url).send().await {
            Ok(response) => readiness::classify_status(response.status().as_u16()),
            // Connection refused, timeout, reset: all the same "not yet".
            Err(e) => ProbeOutcome::NotReady {
                reason: format!("probe error: {e}"),
            },
        }
    }
}
