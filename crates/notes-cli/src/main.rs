//! notes CLI - Command-line client for the notes service
//!
//! Drives a running server through either transport and compares the size of
//! the two encodings.

mod cli;
mod commands;
mod error;
mod http_client;
mod random;
mod rpc_client;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::http::run_http;
use crate::commands::rpc::run_rpc;
use crate::commands::size::run_size;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Http { command } => run_http(command, &cli.base_url, cli.json).await?,
        Commands::Rpc {
            timeout_ms,
            command,
        } => run_rpc(command, &cli.base_url, timeout_ms, cli.json).await?,
        Commands::Size => run_size(cli.json)?,
    }

    Ok(())
}
