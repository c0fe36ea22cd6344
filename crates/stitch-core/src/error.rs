//! Error types for the stitch core library.
//!
//! Each variant is designed to be actionable: file errors carry the
//! offending path, toolchain errors carry the tool name and exit
//! status. The CLI decides which of these are fatal; the library only
//! describes what went wrong.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while probing, patching, or running external tools.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file that was expected to exist.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a file back after modifying it.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Walking the project tree failed on some path.
    ///
    /// `walkdir` errors display the offending path themselves, so the
    /// message names exactly where the walk stopped.
    #[error("Failed to walk project directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// An external tool could not be started at all.
    #[error("Failed to launch '{tool}': {source}\n\nHint: Make sure '{tool}' is installed and on your PATH")]
    ToolLaunch {
        /// Command name that failed to spawn
        tool: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// An external tool ran but exited unsuccessfully.
    #[error("'{tool}' exited unsuccessfully ({status})")]
    ToolFailed {
        /// Command name that failed
        tool: String,
        /// Exit status reported by the child process
        status: ExitStatus,
    },
}

/// Result type alias using [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
