// Main entry point - Logging setup and command dispatch
mod domain;
mod application;
mod infrastructure;
mod presentation;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::Cli;
use crate::presentation::commands::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; RUST_LOG overrides the level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(cli).await
}
