//! `ocr-launcher probe` — one-shot readiness check.
//!
//! Intended for container healthchecks and debugging: exits 0 when the
//! backend answers 2xx on the readiness endpoint, 1 otherwise.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::application::ports::ReadinessProbe;
use crate::domain::{ProbeOutcome, config};
use crate::infra::probe::HttpReadinessProbe;
use crate::output::OutputContext;

/// Arguments for the probe command.
#[derive(Args, Default)]
pub struct ProbeArgs {
    /// Port the vLLM backend listens on
    #[arg(long, env = "OCR_VLLM_PORT", default_value_t = config::DEFAULT_VLLM_PORT)]
    pub vllm_port: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 2)]
    pub timeout_seconds: u64,
}

/// Machine-readable probe result for `--json`.
#[derive(Serialize)]
struct ProbeReport<'a> {
    ready: bool,
    port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Run `ocr-launcher probe`.
///
/// # Errors
///
/// Returns an error when the backend is not ready, so the process exits 1.
pub async fn run(ctx: &OutputContext, args: &ProbeArgs, json: bool) -> Result<()> {
    let probe =
        HttpReadinessProbe::with_timeout(args.vllm_port, Duration::from_secs(args.timeout_seconds))?;
    let outcome = probe.probe().await;

    if json {
        let report = ProbeReport {
            ready: outcome.is_ready(),
            port: args.vllm_port,
            reason: outcome.reason(),
        };
        println!("{}", serde_json::to_string(&report)?);
        if !outcome.is_ready() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match outcome {
        ProbeOutcome::Ready => {
            ctx.success(&format!("vLLM backend on port {} is ready.", args.vllm_port));
            Ok(())
        }
        ProbeOutcome::NotReady { reason } => anyhow::bail!(
            "vLLM backend on port {} is not ready ({reason})",
            args.vllm_port
        ),
    }
}
