//! Command-line interface.

pub mod output;
pub mod teardown;

use clap::Parser;

/// Teardown - Clean up a local demo session.
#[derive(Parser, Debug)]
#[command(
    name = "teardown",
    about = "Stop demo processes, revoke .env API keys, delete transcripts, logs and __pycache__",
    version,
    after_help = "Runs in the current directory. Every step is best effort."
)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the step report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the teardown.
///
/// # Errors
///
/// Returns error if the working directory is unavailable or the JSON report
/// cannot be rendered. Individual step failures never surface here.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    teardown::execute(cli.json)
}
