//! Binary crate for the `raincheck` terminal weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive widget loop (state + event handling)
//! - Styled terminal output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines don't garble the widget.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
