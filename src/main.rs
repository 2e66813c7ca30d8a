//! # docupages CLI
//!
//! This is the binary entry point for the `docupages` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and output preferences.
//! - Running the publish command and reporting any error on stderr, which
//!   makes the process exit with status 1.
//!
//! The publish pipeline itself lives in the `docupages` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
