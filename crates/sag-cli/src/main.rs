//! sag command-line application
//!
//! Text-to-speech from the terminal, backed by ElevenLabs.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/sag-cli
//! ```
//!
//! # API key
//!
//! Commands that talk to ElevenLabs need an API key. It is taken from the
//! first of these that is set: `--api-key`, `--api-key-file`,
//! `ELEVENLABS_API_KEY_FILE`, `SAG_API_KEY_FILE`, `ELEVENLABS_API_KEY`,
//! `SAG_API_KEY`. Run `sag status` to see which one is in effect.

mod args;
mod commands;
mod console;
mod router;

use args::Cli;
use clap::Parser;
use console::CliConsole;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    init_logging(verbose);

    match router::route(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            CliConsole::new(verbose).report_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with environment-based filtering
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug`. Logs go
/// to stderr so command output on stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
