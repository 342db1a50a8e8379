//! OCR launcher - boots the vLLM backend and hands off to the API server

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use ocr_launcher::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
