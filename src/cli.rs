//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Boots the vLLM backend and hands off to the OCR API server
#[derive(Parser)]
#[command(
    name = "ocr-launcher",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the vLLM backend, wait until it is ready, then exec the API server
    Serve(commands::serve::ServeArgs),

    /// One-shot readiness probe against the vLLM backend
    Probe(commands::probe::ProbeArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { no_color, quiet, json, command } = self;
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::Serve(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::serve::run(&ctx, &args).await
            }
            Command::Probe(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::probe::run(&ctx, &args, json).await
            }
        }
    }
}
