//! Launch configuration — defaults and command-line resolution.
//!
//! Pure functions only — no I/O, no async, no environment access. The
//! command layer feeds CLI/env values in; this module turns them into
//! ready-to-spawn command specs.

use anyhow::Result;

use crate::domain::error::CommandLineError;

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Port the API server binds on all interfaces (`OCR_API_PORT`).
pub const DEFAULT_API_PORT: u16 = 8000;
/// Port the vLLM backend listens on loopback (`OCR_VLLM_PORT`).
pub const DEFAULT_VLLM_PORT: u16 = 8001;
/// Seconds to wait for backend readiness (`OCR_VLLM_STARTUP_TIMEOUT_SECONDS`).
pub const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 600;

/// Default backend invocation. The entrypoint module shields vLLM startup
/// from broken flash-attn wheels before delegating to the OpenAI server.
pub const DEFAULT_VLLM_COMMAND: &str =
    "python3 -m app.vllm_no_flash_entrypoint --host 127.0.0.1 --port {port}";

/// Default API server invocation.
pub const DEFAULT_API_COMMAND: &str = "uvicorn app.main:app --host 0.0.0.0 --port {port}";

// ── Command specs ────────────────────────────────────────────────────────────

/// A program plus arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Parse a whitespace-separated command line, substituting `{port}`.
    ///
    /// No shell quoting is supported: each whitespace-separated token is one
    /// argument. Commands that need shell syntax should be wrapped in a
    /// script and the script path passed here.
    ///
    /// # Errors
    ///
    /// Returns an error if the line contains no tokens.
    pub fn parse(line: &str, port: u16) -> Result<Self> {
        let rendered = line.replace("{port}", &port.to_string());
        let mut tokens = rendered.split_whitespace().map(str::to_owned);
        let program = tokens.next().ok_or(CommandLineError::Empty)?;
        Ok(Self {
            program,
            args: tokens.collect(),
        })
    }

    /// The command as a single printable line.
    #[must_use]
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Resolve the backend launch command for `port`.
///
/// # Errors
///
/// Returns an error if an override line is empty.
pub fn backend_command(override_line: Option<&str>, port: u16) -> Result<CommandSpec> {
    CommandSpec::parse(override_line.unwrap_or(DEFAULT_VLLM_COMMAND), port)
}

/// Resolve the API server command for `port`.
///
/// # Errors
///
/// Returns an error if an override line is empty.
pub fn api_command(override_line: Option<&str>, port: u16) -> Result<CommandSpec> {
    CommandSpec::parse(override_line.unwrap_or(DEFAULT_API_COMMAND), port)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
