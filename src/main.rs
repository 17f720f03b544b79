//! Teardown - Clean up a local demo session in one command.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use teardown::cli::output;
use teardown::cli::{execute, Cli};
use teardown::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("teardown=debug")
        } else {
            EnvFilter::new("teardown=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
