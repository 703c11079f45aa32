//! # textmod - text transformations for launchers
//!
//! Entry point of the `textmod` binary, which underlines, joins, collapses and
//! re-flows text and prints either the plain result or launcher items as JSON.
//!
//! ## Features
//! - One subcommand per transformation, input from an argument or stdin
//! - `--json` item output and an `all` mode listing every transformation
//! - Configuration from the environment (optionally a `.env` file)
//! - Shell completions

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

/// Main application entry point
///
/// Handles:
/// - Environment configuration via dotenv
/// - CLI argument parsing and logger setup
/// - Dispatch to the selected transformation
///
/// # Errors
/// Returns an error if input cannot be read or output cannot be written.
/// Exits with status 1 on invalid configuration or a failed transformation.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if !run::dispatch(&args, &config)? {
        std::process::exit(1);
    }
    Ok(())
}
