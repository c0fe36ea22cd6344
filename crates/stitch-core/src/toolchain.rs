//! External toolchain invocation.
//!
//! Installing Tailwind's packages and scaffolding its config files
//! are capability boundaries: they shell out to `npm`/`npx` and can
//! take a while. The [`Toolchain`] trait keeps that boundary
//! injectable so the setup flow can be tested with a fake instead of
//! a real package manager.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Dev dependencies installed before scaffolding the Tailwind config.
pub const DEV_DEPENDENCIES: [&str; 3] = ["tailwindcss", "postcss", "autoprefixer"];

/// External commands needed to set up Tailwind in a project.
pub trait Toolchain {
    /// Install Tailwind's dev dependencies into the project.
    fn install_dependencies(&self, root: &Path) -> Result<()>;

    /// Generate default `tailwind.config.js` and `postcss.config.js`.
    fn scaffold_config(&self, root: &Path) -> Result<()>;
}

/// The real toolchain: `npm` for installs, `npx` for scaffolding.
///
/// Both commands run in the project root and inherit the parent's
/// console streams so the user sees live installer output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmToolchain;

impl Toolchain for NpmToolchain {
    fn install_dependencies(&self, root: &Path) -> Result<()> {
        let mut args = vec!["install", "-D"];
        args.extend(DEV_DEPENDENCIES);
        run_tool("npm", &args, root)
    }

    fn scaffold_config(&self, root: &Path) -> Result<()> {
        // `-p` also emits the accompanying postcss.config.js.
        run_tool("npx", &["tailwindcss", "init", "-p"], root)
    }
}

fn run_tool(tool: &str, args: &[&str], root: &Path) -> Result<()> {
    let status = Command::new(tool)
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::ToolLaunch {
            tool: tool.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::ToolFailed {
            tool: tool.to_string(),
            status,
        })
    }
}
