//! create-devx - create a new Express.js backend with one command
//!
//! Entry point: parses arguments, sets up logging and signal handling, then
//! hands over to the create command.

mod cli;
mod commands;
mod output;
mod prompt;
mod report;
mod signal;
mod version;

use std::process::ExitCode;

use clap::Parser;
use devx_scaffold::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let token = CancellationToken::new();
    signal::cancel_on_signal(token.clone());

    commands::create::run(cli, token).await
}

/// Initialize tracing with appropriate verbosity.
///
/// Logs go to stderr; stdout carries the user-facing progress.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
