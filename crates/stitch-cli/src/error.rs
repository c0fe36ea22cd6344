//! Error handling for the stitch CLI.
//!
//! The CLI wraps `stitch-core` errors in [`CliError`] and converts
//! them to miette diagnostics at the very top of `main`. Only the
//! failures spec'd as fatal ever reach `main`: an unresolvable
//! working directory, or an install/scaffold step that failed. Patch
//! failures are printed and swallowed inside the command.

use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the core setup library (toolchain, patching)
    #[error(transparent)]
    Setup(#[from] stitch_core::Error),

    /// I/O errors from the CLI's own filesystem access
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`CliError`] as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a [`CliError`] to a miette [`Report`] for rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Setup(stitch_core::Error::ToolFailed { tool, status }) => miette::miette!(
            "'{}' exited unsuccessfully ({})\n\nHint: Inspect the output above for the underlying failure",
            tool,
            status
        ),
        other => miette::miette!("{}", other),
    }
}
