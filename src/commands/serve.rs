//! `ocr-launcher serve` — boot the vLLM backend, wait for readiness, exec
//! the API server.
//!
//! The launcher goes through exactly one of three ends: it becomes the API
//! server (exec), it reports a dead backend, or it reports a timeout. The
//! latter two exit non-zero and leave restart policy to whatever supervises
//! the container.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::application::ports::BackendChild;
use crate::application::services::readiness::wait_ready;
use crate::domain::{LaunchError, config};
use crate::infra::probe::HttpReadinessProbe;
use crate::infra::process;
use crate::output::{OutputContext, progress};

/// Arguments for the serve command.
#[derive(Args, Default)]
pub struct ServeArgs {
    /// Port the API server binds on all interfaces
    #[arg(long, env = "OCR_API_PORT", default_value_t = config::DEFAULT_API_PORT)]
    pub api_port: u16,

    /// Port the vLLM backend listens on (loopback only)
    #[arg(long, env = "OCR_VLLM_PORT", default_value_t = config::DEFAULT_VLLM_PORT)]
    pub vllm_port: u16,

    /// Seconds to wait for the backend before giving up
    #[arg(
        long,
        env = "OCR_VLLM_STARTUP_TIMEOUT_SECONDS",
        default_value_t = config::DEFAULT_STARTUP_TIMEOUT_SECS
    )]
    pub startup_timeout_seconds: u64,

    /// Override the backend launch command ({port} is substituted)
    #[arg(long, env = "OCR_VLLM_COMMAND")]
    pub vllm_command: Option<String>,

    /// Override the API server command ({port} is substituted)
    #[arg(long, env = "OCR_API_COMMAND")]
    pub api_command: Option<String>,
}

/// What ended the waiting phase.
enum ServeEvent {
    Polled(Result<(), LaunchError>),
    Interrupted(i32),
}

/// Run `ocr-launcher serve`.
///
/// On success this function never returns: the process image is replaced
/// by the API server.
///
/// # Errors
///
/// Returns an error if the backend cannot be spawned, dies before becoming
/// ready, fails to become ready in time, or the final exec fails.
pub async fn run(ctx: &OutputContext, args: &ServeArgs) -> Result<()> {
    let backend = config::backend_command(args.vllm_command.as_deref(), args.vllm_port)?;
    let api = config::api_command(args.api_command.as_deref(), args.api_port)?;
    let timeout = Duration::from_secs(args.startup_timeout_seconds);

    ctx.info(&format!(
        "starting vLLM backend on 127.0.0.1:{}",
        args.vllm_port
    ));
    let mut child = process::spawn_backend(&backend)?;
    if let Some(pid) = child.id() {
        ctx.kv("Backend PID", &pid.to_string());
    }

    let probe = HttpReadinessProbe::new(args.vllm_port)?;
    let pb = ctx
        .show_progress()
        .then(|| progress::spinner("waiting for vLLM backend to become ready..."));

    let event = tokio::select! {
        res = wait_ready(&mut child, &probe, timeout) => ServeEvent::Polled(res),
        code = process::shutdown_signal() => ServeEvent::Interrupted(code),
    };

    match event {
        ServeEvent::Polled(Ok(())) => {
            if let Some(pb) = pb {
                progress::finish_ok(&pb, "vLLM backend is ready.");
            } else {
                ctx.success("vLLM backend is ready.");
            }
            ctx.info(&format!(
                "handing off to the API server on 0.0.0.0:{}",
                args.api_port
            ));

            // exec(2) only returns on failure.
            let err = match process::exec_api_server(&api) {
                Ok(never) => match never {},
                Err(e) => e,
            };
            child.terminate().await;
            Err(err)
        }
        ServeEvent::Polled(Err(e)) => {
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            child.terminate().await;
            Err(e.into())
        }
        ServeEvent::Interrupted(code) => {
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            child.terminate().await;
            std::process::exit(code);
        }
    }
}
