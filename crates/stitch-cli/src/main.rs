//! Stitch CLI - Tailwind CSS setup for Vite React and Next.js projects.
//!
//! This is the main entry point for the stitch CLI. It handles
//! command-line argument parsing, logging initialization, and runs the
//! single setup action.

use clap::Parser;
use miette::Result;
use stitch_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Run the single setup action; convert errors to miette
    // diagnostics for readable error reporting
    commands::setup_execute().map_err(error::cli_error_to_miette)
}
