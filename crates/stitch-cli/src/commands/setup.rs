//! Setup command implementation.
//!
//! The whole tool is this one flow:
//!
//! 1. Resolve the project root from the working directory (fatal on
//!    failure).
//! 2. Stat `tailwind.config.js`:
//!    - missing: install dev dependencies and scaffold the config
//!      (either step failing is fatal), then patch
//!    - present: patch
//!    - any other stat error: report it and modify nothing
//! 3. Patching replaces the config's `content` placeholder per
//!    detected framework and prepends the `@tailwind` directives to
//!    every `index.css`. Patch failures are reported but never change
//!    the exit code.

use std::fs;
use std::io;
use std::path::Path;

use stitch_core::patch::{self, ConfigPatch, CONTENT_PLACEHOLDER, TAILWIND_CONFIG};
use stitch_core::{detect, NpmToolchain, Toolchain};

use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the setup command against the current working directory
/// with the real npm toolchain.
pub fn execute() -> Result<()> {
    let root = utils::get_cwd()?;
    run_with(&root, &NpmToolchain)
}

/// Run the setup flow against an explicit project root.
///
/// The toolchain is injected so tests can observe install/scaffold
/// calls without invoking a real package manager.
///
/// # Errors
///
/// Only install/scaffold failures propagate; everything downstream of
/// them is reported through the UI and swallowed.
pub fn run_with(root: &Path, toolchain: &dyn Toolchain) -> Result<()> {
    let config_path = root.join(TAILWIND_CONFIG);

    match fs::metadata(&config_path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            ui::info(&format!(
                "{} not found in {}",
                TAILWIND_CONFIG,
                root.display()
            ));
            ui::info("Installing required npm packages...");
            toolchain.install_dependencies(root)?;
            toolchain.scaffold_config(root)?;
            apply_patches(root, &config_path);
        }
        Err(err) => {
            // Stat errors other than NotFound leave the project untouched.
            ui::error(&format!(
                "Failed to check {}: {}",
                config_path.display(),
                err
            ));
        }
        Ok(_) => {
            ui::info(&format!("{} found in {}", TAILWIND_CONFIG, root.display()));
            apply_patches(root, &config_path);
        }
    }

    Ok(())
}

/// Patch the config for each detected framework, then the stylesheets.
fn apply_patches(root: &Path, config_path: &Path) {
    let profile = detect::probe(root);

    if !profile.is_recognized() {
        ui::info("No Vite React or Next.js markers in package.json; leaving config untouched");
    }

    for framework in profile.frameworks() {
        match patch::patch_config(config_path, framework) {
            Ok(ConfigPatch::Applied) => {
                ui::success(&format!("Patched {} for {}", TAILWIND_CONFIG, framework));
            }
            Ok(ConfigPatch::PlaceholderMissing) => {
                ui::warning(&format!(
                    "No '{}' placeholder in {}; file left unchanged",
                    CONTENT_PLACEHOLDER, TAILWIND_CONFIG
                ));
            }
            Err(err) => ui::error(&err.to_string()),
        }
    }

    match patch::patch_stylesheets(root) {
        Ok(patched) => {
            for path in &patched {
                ui::success(&format!("Added Tailwind directives to {}", path.display()));
            }
        }
        Err(err) => ui::error(&format!("Stylesheet patching aborted: {}", err)),
    }
}
