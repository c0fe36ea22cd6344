//! Config and stylesheet patching.
//!
//! Two read-modify-write operations, both working on raw text:
//!
//! - [`patch_config`] swaps the scaffolder's `content: [],`
//!   placeholder in `tailwind.config.js` for a framework-specific
//!   glob list.
//! - [`patch_stylesheets`] prepends the `@tailwind` directive block
//!   to every `index.css` under the project root.
//!
//! Neither operation is idempotent. Patching a config twice only
//! works while the placeholder is still present; patching stylesheets
//! twice duplicates the directive block. Callers that care should run
//! once.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::detect::Framework;
use crate::error::{Error, Result};

/// File name of the Tailwind configuration in the project root.
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";

/// Base name of stylesheets that receive the directive block.
pub const STYLESHEET: &str = "index.css";

/// Default `content` entry emitted by `npx tailwindcss init`.
pub const CONTENT_PLACEHOLDER: &str = "content: [],";

/// Directive block prepended to each stylesheet, blank line included.
pub const TAILWIND_DIRECTIVES: &str =
    "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n";

/// Outcome of a single config patch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPatch {
    /// The placeholder was found and replaced.
    Applied,
    /// The placeholder was absent; the file was left byte-identical.
    ///
    /// This happens when the config was hand-edited, already patched,
    /// or the scaffolder's default output changed. Callers should
    /// surface it as a warning rather than silent success.
    PlaceholderMissing,
}

/// Replace the first `content: [],` in the config with the
/// framework's glob list.
///
/// Reads the whole file, substitutes the first placeholder
/// occurrence, and writes the result back. Everything outside the
/// placeholder stays byte-identical.
///
/// # Errors
///
/// [`Error::Read`] or [`Error::Write`] on I/O failure; the file is
/// never written when the read failed or the placeholder was missing.
pub fn patch_config(path: &Path, framework: Framework) -> Result<ConfigPatch> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !content.contains(CONTENT_PLACEHOLDER) {
        return Ok(ConfigPatch::PlaceholderMissing);
    }

    let patched = content.replacen(CONTENT_PLACEHOLDER, framework.content_globs(), 1);
    fs::write(path, patched).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Replaced content placeholder in {} for {}", path.display(), framework);
    Ok(ConfigPatch::Applied)
}

/// Prepend the `@tailwind` directives to every `index.css` under
/// `root`, returning the patched paths in walk order.
///
/// The prepend is unconditional: directives already present are not
/// detected, so repeated runs duplicate the block.
///
/// # Errors
///
/// The first walk error or per-file I/O error aborts the remaining
/// walk and is returned; files patched before the failure stay
/// patched.
pub fn patch_stylesheets(root: &Path) -> Result<Vec<PathBuf>> {
    let mut patched = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() != STYLESHEET {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, format!("{}{}", TAILWIND_DIRECTIVES, content)).map_err(|source| {
            Error::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!("Prepended Tailwind directives to {}", path.display());
        patched.push(path.to_path_buf());
    }

    Ok(patched)
}
