//! Stitch CLI - Tailwind CSS setup for Vite React and Next.js projects.
//!
//! This crate provides the command-line interface over `stitch-core`,
//! wiring the framework probe, toolchain invocation, and patching
//! steps into one no-argument action with clear console output.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions (global verbosity/color flags)
//! - [`commands`] - the setup orchestration
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
