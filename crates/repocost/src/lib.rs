//! # repocost
//!
//! **CLI Binary**
//!
//! Entry point for the `repocost` command-line application. It wires the
//! scanner, aggregator, estimator and renderers together.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Initialise logging
//! * Load `repocost.toml` and resolve CLI > TOML > default precedence
//! * Dispatch commands and map errors to exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
pub mod config;
mod error_hints;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use repocost_config::Cli;

/// Parse the process arguments and run the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    let resolved = config::load(&cli.global)?;
    commands::dispatch(cli, &resolved)
}

/// `Error: ...` followed by any hints that apply.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // A second init (tests calling run twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
